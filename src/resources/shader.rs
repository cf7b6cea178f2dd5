//! Shader program construction
//!
//! The demo uses a single GLSL ES 1.00 program. Its vertex stage forwards
//! position and color; when `u_mode` is 1 (triangle strip) it remaps clip
//! space from `[-1, 1]` to `[0, 1]`.

use thiserror::Error;

use crate::backend::traits::{BackendError, GlBackend};
use crate::backend::types::ShaderStage;

pub const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec4 a_position;
attribute vec4 a_color;
uniform int u_mode;

varying vec4 v_color;

void main() {
    gl_Position = a_position;
    v_color = a_color;

    if (u_mode == 1) {
        gl_Position.xy = (gl_Position.xy + 1.0) / 2.0;
    }
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
precision mediump float;

varying vec4 v_color;

void main() {
    gl_FragColor = v_color;
}
"#;

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const COLOR_ATTRIBUTE: &str = "a_color";
pub const MODE_UNIFORM: &str = "u_mode";

/// Shader program error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("Failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("Failed to link program: {log}")]
    Link { log: String },
    #[error("Attribute `{0}` is not active in the program")]
    MissingAttribute(String),
    #[error("Uniform `{0}` is not active in the program")]
    MissingUniform(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A linked program and the locations the renderer binds
pub struct ShaderProgram<B: GlBackend> {
    pub program: B::Program,
    pub position_location: u32,
    pub color_location: u32,
    pub mode_location: B::UniformLocation,
}

/// Compiles and links the demo program
#[derive(Debug, Clone, Copy)]
pub struct ShaderProgramBuilder<'a> {
    vertex_source: &'a str,
    fragment_source: &'a str,
}

impl Default for ShaderProgramBuilder<'static> {
    fn default() -> Self {
        Self {
            vertex_source: VERTEX_SHADER_SOURCE,
            fragment_source: FRAGMENT_SHADER_SOURCE,
        }
    }
}

impl ShaderProgramBuilder<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> ShaderProgramBuilder<'a> {
    /// Builder for other sources. They must declare the same attributes and uniform.
    pub fn with_sources(vertex_source: &'a str, fragment_source: &'a str) -> Self {
        Self {
            vertex_source,
            fragment_source,
        }
    }

    /// Compile both stages, link them and resolve the bound locations.
    ///
    /// Nothing created along the way outlives a failure.
    pub fn build<B: GlBackend>(&self, backend: &mut B) -> Result<ShaderProgram<B>, ShaderError> {
        let vertex = compile(backend, ShaderStage::Vertex, self.vertex_source)?;
        let fragment = match compile(backend, ShaderStage::Fragment, self.fragment_source) {
            Ok(shader) => shader,
            Err(e) => {
                backend.delete_shader(vertex);
                return Err(e);
            }
        };

        let program = match backend.create_program() {
            Ok(program) => program,
            Err(e) => {
                backend.delete_shader(vertex);
                backend.delete_shader(fragment);
                return Err(e.into());
            }
        };

        backend.attach_shader(&program, &vertex);
        backend.attach_shader(&program, &fragment);
        backend.link_program(&program);

        // Attached shaders are only flagged; they go away with the program
        backend.delete_shader(vertex);
        backend.delete_shader(fragment);

        if !backend.link_status(&program) {
            let log = backend.program_info_log(&program);
            backend.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        match resolve_locations(backend, &program) {
            Ok((position_location, color_location, mode_location)) => {
                log::info!(
                    "Shader program linked ({}={}, {}={})",
                    POSITION_ATTRIBUTE,
                    position_location,
                    COLOR_ATTRIBUTE,
                    color_location
                );
                Ok(ShaderProgram {
                    program,
                    position_location,
                    color_location,
                    mode_location,
                })
            }
            Err(e) => {
                backend.delete_program(program);
                Err(e)
            }
        }
    }
}

fn compile<B: GlBackend>(
    backend: &mut B,
    stage: ShaderStage,
    source: &str,
) -> Result<B::Shader, ShaderError> {
    let shader = backend.create_shader(stage)?;
    backend.shader_source(&shader, source);
    backend.compile_shader(&shader);

    if !backend.compile_status(&shader) {
        let log = backend.shader_info_log(&shader);
        backend.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader)
}

fn resolve_locations<B: GlBackend>(
    backend: &B,
    program: &B::Program,
) -> Result<(u32, u32, B::UniformLocation), ShaderError> {
    let position = backend
        .attrib_location(program, POSITION_ATTRIBUTE)
        .ok_or_else(|| ShaderError::MissingAttribute(POSITION_ATTRIBUTE.into()))?;
    let color = backend
        .attrib_location(program, COLOR_ATTRIBUTE)
        .ok_or_else(|| ShaderError::MissingAttribute(COLOR_ATTRIBUTE.into()))?;
    let mode = backend
        .uniform_location(program, MODE_UNIFORM)
        .ok_or_else(|| ShaderError::MissingUniform(MODE_UNIFORM.into()))?;
    Ok((position, color, mode))
}

#[cfg(all(test, feature = "dummy"))]
mod tests {
    use super::*;
    use crate::backend::dummy::DummyBackend;

    #[test]
    fn test_build_resolves_all_locations() {
        let mut backend = DummyBackend::new();
        let program = ShaderProgramBuilder::new().build(&mut backend).unwrap();
        assert_eq!(program.position_location, 0);
        assert_eq!(program.color_location, 1);
        assert_eq!(backend.live_shaders(), 0);
        assert_eq!(backend.live_programs(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "syntax error".into(),
        };
        assert_eq!(err.to_string(), "Failed to compile fragment shader: syntax error");

        let err = ShaderError::MissingUniform(MODE_UNIFORM.into());
        assert_eq!(err.to_string(), "Uniform `u_mode` is not active in the program");
    }
}
