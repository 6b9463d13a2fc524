//! GPU vertex buffers.

use std::sync::Arc;

use crate::abs::{BufferUsage, ContextError, GraphicsContext};

/// A vertex-attribute buffer stored on the GPU side.
///
/// Knows how many floats make up one vertex (`item_size`) and how many
/// vertices it holds (`item_count`), which is all a renderer needs to set up
/// the attribute read. Both come from the `[f32; N]` vertex type it was built
/// from, so they always describe the uploaded data exactly.
pub struct VertexBuffer<C: GraphicsContext = glow::Context> {
    gl: Arc<C>,
    id: C::Buffer,
    item_size: usize,
    item_count: usize,
}

impl<C: GraphicsContext> VertexBuffer<C> {
    /// Allocates a buffer and uploads `vertices` once with a static usage hint.
    pub fn new_static<const N: usize>(
        gl: &Arc<C>,
        vertices: &[[f32; N]],
    ) -> Result<Self, ContextError> {
        let id = gl.create_buffer()?;

        gl.bind_buffer(Some(id));
        gl.buffer_data(vertices.as_flattened(), BufferUsage::Static);
        gl.bind_buffer(None);

        Ok(Self {
            gl: Arc::clone(gl),
            id,
            item_size: N,
            item_count: vertices.len(),
        })
    }

    /// Binds the buffer as the current array buffer.
    pub fn bind(&self) {
        self.gl.bind_buffer(Some(self.id));
    }

    pub fn handle(&self) -> C::Buffer {
        self.id
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

impl<C: GraphicsContext> Drop for VertexBuffer<C> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.id);
    }
}
