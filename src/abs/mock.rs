//! Recording context used by the unit tests.

use std::cell::{Cell, RefCell};

use crate::abs::{BufferUsage, ContextError, GraphicsContext, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32, String),
    CompileShader(u32),
    CreateBuffer(u32),
    BindBuffer(Option<u32>),
    BufferData(Option<u32>, Vec<f32>, BufferUsage),
}

/// Fake context that accepts any source containing `void main(`.
#[derive(Default)]
pub struct MockContext {
    next_id: Cell<u32>,
    fail_after: Cell<Option<u32>>,
    bound: Cell<Option<u32>>,
    calls: RefCell<Vec<Call>>,
    sources: RefCell<Vec<(u32, String)>>,
    deleted_shaders: RefCell<Vec<u32>>,
    deleted_buffers: RefCell<Vec<u32>>,
}

impl MockContext {
    pub fn fail_allocations(&self) {
        self.fail_after(0);
    }

    /// Lets the next `n` allocations succeed and refuses every one after.
    pub fn fail_after(&self, n: u32) {
        self.fail_after.set(Some(self.next_id.get() + n));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn shaders_created(&self) -> usize {
        self.count(|c| matches!(c, Call::CreateShader(..)))
    }

    pub fn buffers_created(&self) -> usize {
        self.count(|c| matches!(c, Call::CreateBuffer(_)))
    }

    /// Data uploaded into `buffer`, with the usage hint.
    pub fn uploads_to(&self, buffer: u32) -> Vec<(Vec<f32>, BufferUsage)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::BufferData(Some(id), data, usage) if *id == buffer => {
                    Some((data.clone(), *usage))
                }
                _ => None,
            })
            .collect()
    }

    pub fn deleted_shaders(&self) -> Vec<u32> {
        self.deleted_shaders.borrow().clone()
    }

    pub fn deleted_buffers(&self) -> Vec<u32> {
        self.deleted_buffers.borrow().clone()
    }

    fn count(&self, f: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| f(c)).count()
    }

    fn allocate(&self, resource: &'static str) -> Result<u32, ContextError> {
        if self.fail_after.get().is_some_and(|limit| self.next_id.get() >= limit) {
            return Err(ContextError::Allocation {
                resource,
                message: "mock context refused".into(),
            });
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(id)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphicsContext for MockContext {
    type Shader = u32;
    type Buffer = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, ContextError> {
        let id = self.allocate("shader")?;
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().push((shader, source.to_owned()));
        self.record(Call::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .iter()
            .rev()
            .find(|(id, _)| *id == shader)
            .is_some_and(|(_, source)| source.contains("void main("))
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "ERROR: 0:1: 'main' : function not found".to_owned()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.deleted_shaders.borrow_mut().push(shader);
    }

    fn create_buffer(&self) -> Result<u32, ContextError> {
        let id = self.allocate("buffer")?;
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, buffer: Option<u32>) {
        self.bound.set(buffer);
        self.record(Call::BindBuffer(buffer));
    }

    fn buffer_data(&self, data: &[f32], usage: BufferUsage) {
        self.record(Call::BufferData(self.bound.get(), data.to_vec(), usage));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.deleted_buffers.borrow_mut().push(buffer);
    }
}
