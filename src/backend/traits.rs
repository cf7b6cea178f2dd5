//! Core backend abstraction traits
//!
//! The subset of the WebGL 1 API the demo drives. Both the browser backend
//! and the dummy backend implement it.

use crate::backend::types::*;
use thiserror::Error;

/// Backend error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Rendering context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("Failed to create {0}")]
    ResourceCreationFailed(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Graphics API used by the shader builder and the renderer
pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    // Shaders and programs

    /// Create an empty shader object
    fn create_shader(&mut self, stage: ShaderStage) -> BackendResult<Self::Shader>;

    /// Replace the shader's source
    fn shader_source(&mut self, shader: &Self::Shader, source: &str);

    /// Compile the shader
    fn compile_shader(&mut self, shader: &Self::Shader);

    /// Whether the last compile succeeded
    fn compile_status(&self, shader: &Self::Shader) -> bool;

    /// Compiler output for the shader
    fn shader_info_log(&self, shader: &Self::Shader) -> String;

    fn delete_shader(&mut self, shader: Self::Shader);

    /// Create an empty program object
    fn create_program(&mut self) -> BackendResult<Self::Program>;

    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);

    fn link_program(&mut self, program: &Self::Program);

    /// Whether the last link succeeded
    fn link_status(&self, program: &Self::Program) -> bool;

    /// Linker output for the program
    fn program_info_log(&self, program: &Self::Program) -> String;

    fn delete_program(&mut self, program: Self::Program);

    /// Attribute location, `None` if the program has no active attribute with that name
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;

    /// Uniform location, `None` if the program has no active uniform with that name
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    // Buffers

    /// Create a buffer object
    fn create_buffer(&mut self) -> BackendResult<Self::Buffer>;

    /// Bind a buffer to the array buffer target
    fn bind_array_buffer(&mut self, buffer: &Self::Buffer);

    /// Upload data to the bound array buffer, replacing its contents
    fn array_buffer_data(&mut self, data: &[u8], usage: BufferUsage);

    // Drawing

    fn use_program(&mut self, program: &Self::Program);

    fn enable_vertex_attrib_array(&mut self, location: u32);

    /// Describe a float attribute in the bound array buffer
    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute);

    fn uniform1i(&mut self, location: &Self::UniformLocation, value: i32);

    /// Clear the color buffer to the given color
    fn clear(&mut self, color: [f32; 4]);

    /// Draw `count` vertices starting at `first`
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32);

    /// Pop the oldest recorded error
    fn get_error(&mut self) -> GlErrorCode;
}
