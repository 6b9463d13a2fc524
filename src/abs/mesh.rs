//! Mesh management module.
//!
//! This module defines the [`Mesh`] trait for drawable geometry held on the GPU side, and
//! [`Plane`], a flat rectangle that implements it.

use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::abs::{ContextError, GraphicsContext, VertexBuffer};

/// Primitive topology the mesh data is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Topology {
    TriangleStrip = glow::TRIANGLE_STRIP,
}

/// Geometry a renderer can bind: a position buffer and a texture-coordinate buffer whose
/// vertices correspond index by index.
pub trait Mesh<C: GraphicsContext = glow::Context> {
    fn vertex_buffer(&self) -> &VertexBuffer<C>;
    fn tex_coord_buffer(&self) -> &VertexBuffer<C>;
    fn topology(&self) -> Topology;
}

/// Texture coordinates of the plane corners, in strip order.
pub const PLANE_TEX_COORDS: [Vec2; 4] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 0.0),
];

/// Corners of a `width` x `height` plane at z = 0, in strip order.
///
/// Index `i` is the corner textured by `PLANE_TEX_COORDS[i]`.
pub fn plane_vertices(width: f32, height: f32) -> [Vec3; 4] {
    [
        Vec3::new(width, height, 0.0),
        Vec3::new(0.0, height, 0.0),
        Vec3::new(width, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    ]
}

/// A rectangle in the XY plane spanning (0, 0) to (width, height).
///
/// Both buffers are uploaded once at construction and released together on drop; if the second
/// allocation fails, the first buffer is released before the error is returned. Width and height
/// are not validated; zero or negative values give a degenerate or flipped quad.
pub struct Plane<C: GraphicsContext = glow::Context> {
    vertices: VertexBuffer<C>,
    tex_coords: VertexBuffer<C>,
}

impl<C: GraphicsContext> Plane<C> {
    pub fn new(gl: &Arc<C>, width: f32, height: f32) -> Result<Self, ContextError> {
        let positions = plane_vertices(width, height).map(|v| v.to_array());
        let coords = PLANE_TEX_COORDS.map(|c| c.to_array());

        let vertices = VertexBuffer::new_static(gl, &positions)?;
        let tex_coords = VertexBuffer::new_static(gl, &coords)?;

        Ok(Self {
            vertices,
            tex_coords,
        })
    }
}

impl<C: GraphicsContext> Mesh<C> for Plane<C> {
    fn vertex_buffer(&self) -> &VertexBuffer<C> {
        &self.vertices
    }

    fn tex_coord_buffer(&self) -> &VertexBuffer<C> {
        &self.tex_coords
    }

    fn topology(&self) -> Topology {
        Topology::TriangleStrip
    }
}
