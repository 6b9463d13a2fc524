//! GPU resource helpers for a real-time globe renderer.
//!
//! This crate compiles individual shader objects and uploads simple meshes
//! onto a graphics context owned by the application. It never creates the
//! context itself; everything takes an `Arc` to one implementing
//! [`abs::GraphicsContext`], which `glow::Context` does.

pub mod abs;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod markup;

pub use abs::{
    BufferUsage, CompileError, CompileStatus, ContextError, ElementShader, ElementSource,
    GraphicsContext, Mesh, Plane, Shader, ShaderCompiler, ShaderSource, ShaderStage, Topology,
    VertexBuffer,
};
pub use config::{Config, ConfigError};
pub use diagnostics::{DiagnosticSink, LogSink};
