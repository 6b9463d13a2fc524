//! This module contains the GPU resource layer: the graphics context seam,
//! shader compilation, and vertex buffers and meshes.

pub mod buffer;
pub mod context;
pub mod mesh;
pub mod shader;

#[cfg(test)]
pub(crate) mod mock;

pub use buffer::*;
pub use context::*;
pub use mesh::*;
pub use shader::*;
