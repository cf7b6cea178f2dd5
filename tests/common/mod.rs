//! Common utilities for renderer integration tests.
//!
//! Builds renderers on the dummy backend and decodes what they recorded.

use triangle_modes::backend::dummy::DummyBackend;
use triangle_modes::TriangleRenderer;

/// Byte length of the demo mesh (6 vertices x 6 floats x 4 bytes).
#[allow(dead_code)]
pub const MESH_BYTES: usize = 144;

/// Attach `env_logger` so `RUST_LOG` shows renderer logs in test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a renderer with the demo program on a fresh dummy backend.
#[allow(dead_code)]
pub fn dummy_renderer() -> TriangleRenderer<DummyBackend> {
    init_logging();
    TriangleRenderer::with_default_program(DummyBackend::new())
        .expect("demo program should build on the dummy backend")
}

/// Reinterpret uploaded bytes as floats.
#[allow(dead_code)]
pub fn as_floats(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
