//! Top-level error type.

use thiserror::Error;

use crate::backend::traits::BackendError;
use crate::draw_mode::InvalidDrawMode;
use crate::resources::ShaderError;

/// Errors that stop the demo from starting or from handling input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    InvalidDrawMode(#[from] InvalidDrawMode),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::ShaderStage;

    #[test]
    fn test_error_display() {
        let err: DemoError = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:3: 'foo' : undeclared identifier".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Failed to compile vertex shader: 0:3: 'foo' : undeclared identifier"
        );

        let err: DemoError = BackendError::Dom("no element with id `canvas`".into()).into();
        assert_eq!(err.to_string(), "DOM error: no element with id `canvas`");
    }
}
