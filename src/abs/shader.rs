//! Shader compilation
//!
//! This module defines the [`Shader`] struct for individual compiled shader objects and the
//! [`ShaderCompiler`] that produces them, either from source text or from a markup element
//! carrying the source.

use std::sync::Arc;

use crate::{
    abs::{ContextError, GraphicsContext},
    diagnostics::DiagnosticSink,
    markup::ElementLookup,
};

/// Pipeline stage a shader runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ShaderStage {
    Vertex = glow::VERTEX_SHADER,
    Fragment = glow::FRAGMENT_SHADER,
}

impl ShaderStage {
    /// Maps a markup type string (`x-shader/x-vertex`, `x-shader/x-fragment`) to a stage.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "x-shader/x-vertex" => Some(Self::Vertex),
            "x-shader/x-fragment" => Some(Self::Fragment),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Vertex => "x-shader/x-vertex",
            Self::Fragment => "x-shader/x-fragment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    Failure,
}

/// A failed shader turned into an error by [`Shader::into_compiled`].
#[derive(Debug, thiserror::Error)]
#[error("{stage:?} shader failed to compile: {log}")]
pub struct CompileError {
    pub stage: ShaderStage,
    pub log: String,
}

/// A compiled (or failed) shader object.
///
/// The handle is released through the context when the shader is dropped.
pub struct Shader<C: GraphicsContext = glow::Context> {
    gl: Arc<C>,
    id: C::Shader,
    stage: ShaderStage,
    status: CompileStatus,
    log: Option<String>,
}

impl<C: GraphicsContext> Shader<C> {
    pub fn handle(&self) -> C::Shader {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn status(&self) -> CompileStatus {
        self.status
    }

    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Success
    }

    /// Compiler output. Always present on failure; on success only in verbose mode.
    pub fn log(&self) -> Option<&str> {
        self.log.as_deref()
    }

    /// Converts a failed shader into a [`CompileError`], releasing its handle.
    pub fn into_compiled(self) -> Result<Self, CompileError> {
        match self.status {
            CompileStatus::Success => Ok(self),
            CompileStatus::Failure => Err(CompileError {
                stage: self.stage,
                log: self.log.clone().unwrap_or_default(),
            }),
        }
    }
}

impl<C: GraphicsContext> Drop for Shader<C> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Shader source resolved from a markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub text: String,
}

/// Outcome of resolving shader source from a named element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSource {
    Found(ShaderSource),
    /// The element exists but its type is not a shader type.
    Skipped,
    NotFound,
}

/// Outcome of compiling a shader from a named element.
pub enum ElementShader<C: GraphicsContext = glow::Context> {
    Compiled(Shader<C>),
    Skipped,
    NotFound,
}

impl<C: GraphicsContext> ElementShader<C> {
    pub fn shader(self) -> Option<Shader<C>> {
        match self {
            Self::Compiled(shader) => Some(shader),
            Self::Skipped | Self::NotFound => None,
        }
    }
}

/// Looks up `name` and reads its source text and stage. Does not log anything.
pub fn resolve_element<L: ElementLookup + ?Sized>(lookup: &L, name: &str) -> ElementSource {
    let Some(element) = lookup.element(name) else {
        return ElementSource::NotFound;
    };

    match ShaderStage::from_mime(element.kind()) {
        Some(stage) => ElementSource::Found(ShaderSource {
            stage,
            text: element.text_content(),
        }),
        None => ElementSource::Skipped,
    }
}

/// Compiles shader objects on a context, reporting to a diagnostic sink.
pub struct ShaderCompiler<'a, C: GraphicsContext = glow::Context> {
    gl: Arc<C>,
    sink: &'a dyn DiagnosticSink,
    verbose: bool,
}

impl<'a, C: GraphicsContext> ShaderCompiler<'a, C> {
    pub fn new(gl: &Arc<C>, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            gl: Arc::clone(gl),
            sink,
            verbose: false,
        }
    }

    /// Enables informational messages for successful compiles.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Compiles `source` as a `stage` shader.
    ///
    /// A rejected source is not an error: the returned shader carries
    /// [`CompileStatus::Failure`] and the compiler log. `Err` only means the
    /// context could not allocate a shader object.
    pub fn compile(&self, source: &str, stage: ShaderStage) -> Result<Shader<C>, ContextError> {
        let id = self.gl.create_shader(stage)?;

        if self.verbose {
            self.sink.info(&format!("Compiling {stage:?} shader..."));
        }

        self.gl.shader_source(id, source);
        self.gl.compile_shader(id);

        let (status, log) = if self.gl.shader_compile_status(id) {
            if self.verbose {
                self.sink.info("Done");
                (CompileStatus::Success, Some("compiled".to_owned()))
            } else {
                (CompileStatus::Success, None)
            }
        } else {
            let log = self.gl.shader_info_log(id);
            self.sink.error(&log);
            (CompileStatus::Failure, Some(log))
        };

        Ok(Shader {
            gl: Arc::clone(&self.gl),
            id,
            stage,
            status,
            log,
        })
    }

    /// Compiles the shader held by the element called `name`.
    ///
    /// A missing element is reported to the sink; an element whose type is not
    /// a shader type is skipped silently.
    pub fn compile_element<L: ElementLookup + ?Sized>(
        &self,
        lookup: &L,
        name: &str,
    ) -> Result<ElementShader<C>, ContextError> {
        if self.verbose {
            self.sink.info(&format!("Loading shader from \"{name}\"..."));
        }

        match resolve_element(lookup, name) {
            ElementSource::Found(source) => Ok(ElementShader::Compiled(
                self.compile(&source.text, source.stage)?,
            )),
            ElementSource::Skipped => Ok(ElementShader::Skipped),
            ElementSource::NotFound => {
                self.sink
                    .error(&format!("Could not create shader from element {name}"));
                Ok(ElementShader::NotFound)
            }
        }
    }
}
