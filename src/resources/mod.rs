//! Resource management
//!
//! The static mesh and the shader program the renderer draws with.

mod mesh;
mod shader;

pub use mesh::*;
pub use shader::*;
