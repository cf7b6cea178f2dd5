//! Triangle Modes - a WebGL demo of primitive assembly
//!
//! One static mesh of six colored vertices is drawn with one of three
//! assembly modes:
//! - **Triangles**: vertices `[0..3)` and `[3..6)` form two separate triangles
//! - **Triangle strip**: every vertex after the second closes a triangle
//!   with the two before it
//! - **Triangle fan**: every triangle shares vertex 0
//!
//! Rendering goes through the [`GlBackend`] trait. In the browser it is
//! backed by WebGL; the `dummy` backend records calls instead and is what
//! the tests run against.

pub mod backend;
pub mod draw_mode;
pub mod error;
pub mod renderer;
pub mod resources;

// Web-specific modules
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
mod web_demo;

pub use backend::{BackendError, GlBackend, GlErrorCode, PrimitiveTopology, Vertex};
#[cfg(feature = "dummy")]
pub use backend::dummy::DummyBackend;
pub use draw_mode::{DrawMode, InvalidDrawMode};
pub use error::DemoError;
pub use renderer::{FrameReport, TriangleRenderer};
pub use resources::{Mesh, ShaderError, ShaderProgram, ShaderProgramBuilder};

#[cfg(target_arch = "wasm32")]
pub use web_demo::DemoApp;

/// Configuration for the browser demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Id of the canvas to render into
    pub canvas_id: String,
    /// Id of the button for each mode, in [`DrawMode::ALL`] order
    pub button_ids: [String; 3],
    /// Color the canvas is cleared to before each draw
    pub clear_color: [f32; 4],
    /// Maximum level forwarded to the browser console
    pub log_level: log::Level,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            button_ids: DrawMode::ALL.map(|mode| mode.button_id().to_string()),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            log_level: log::Level::Info,
        }
    }
}

impl DemoConfig {
    pub fn with_canvas_id(mut self, canvas_id: &str) -> Self {
        self.canvas_id = canvas_id.to_string();
        self
    }

    pub fn with_button_id(mut self, mode: DrawMode, button_id: &str) -> Self {
        self.button_ids[mode.code() as usize] = button_id.to_string();
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_log_level(mut self, log_level: log::Level) -> Self {
        self.log_level = log_level;
        self
    }

    /// Button id configured for `mode`
    pub fn button_id(&self, mode: DrawMode) -> &str {
        &self.button_ids[mode.code() as usize]
    }
}

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging(level: log::Level) {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    // A second init keeps the first logger
    if console_log::init_with_level(level).is_err() {
        log::debug!("Console logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_page() {
        let config = DemoConfig::default();
        assert_eq!(config.canvas_id, "canvas");
        assert_eq!(config.button_id(DrawMode::Triangles), "triangles");
        assert_eq!(config.button_id(DrawMode::TriangleStrip), "triangle_strip");
        assert_eq!(config.button_id(DrawMode::TriangleFan), "triangle_fan");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_config_builders() {
        let config = DemoConfig::default()
            .with_canvas_id("stage")
            .with_button_id(DrawMode::TriangleFan, "fan")
            .with_clear_color([1.0, 1.0, 1.0, 1.0])
            .with_log_level(log::Level::Debug);
        assert_eq!(config.canvas_id, "stage");
        assert_eq!(config.button_id(DrawMode::TriangleFan), "fan");
        assert_eq!(config.button_id(DrawMode::Triangles), "triangles");
        assert_eq!(config.clear_color, [1.0; 4]);
        assert_eq!(config.log_level, log::Level::Debug);
    }
}
