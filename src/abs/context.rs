//! Graphics context abstraction.
//!
//! [`GraphicsContext`] is the small set of entry points the shader compiler and
//! meshes need from the live graphics API. It is implemented for
//! [`glow::Context`], which covers desktop OpenGL and WebGL alike.

use std::fmt::Debug;

use glow::HasContext;

use crate::abs::ShaderStage;

/// Error returned when the context refuses to hand out a new resource.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to allocate {resource}: {message}")]
    Allocation {
        resource: &'static str,
        message: String,
    },
}

/// Usage hint attached to a buffer upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BufferUsage {
    Static = glow::STATIC_DRAW,
    Dynamic = glow::DYNAMIC_DRAW,
    Stream = glow::STREAM_DRAW,
}

/// Entry points of a live graphics context.
///
/// All calls must happen on the thread that owns the rendering surface, with
/// the context current. Implementations perform no locking.
pub trait GraphicsContext {
    type Shader: Copy + Eq + Debug;
    type Buffer: Copy + Eq + Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, ContextError>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_buffer(&self) -> Result<Self::Buffer, ContextError>;
    /// Binds `buffer` as the current array buffer, or unbinds with `None`.
    fn bind_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the currently bound array buffer.
    fn buffer_data(&self, data: &[f32], usage: BufferUsage);
    fn delete_buffer(&self, buffer: Self::Buffer);
}

// The glow calls are unsafe because they go straight to the driver. The
// threading contract on `GraphicsContext` is what keeps them sound.
impl GraphicsContext for glow::Context {
    type Shader = glow::Shader;
    type Buffer = glow::Buffer;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, ContextError> {
        let shader = unsafe { HasContext::create_shader(self, stage as u32) };
        shader.map_err(|message| ContextError::Allocation {
            resource: "shader",
            message,
        })
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, ContextError> {
        let buffer = unsafe { HasContext::create_buffer(self) };
        buffer.map_err(|message| ContextError::Allocation {
            resource: "buffer",
            message,
        })
    }

    fn bind_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn buffer_data(&self, data: &[f32], usage: BufferUsage) {
        unsafe {
            self.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                usage as u32,
            )
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }
}
