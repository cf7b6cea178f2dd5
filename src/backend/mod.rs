//! Backend abstraction layer
//!
//! Provides the GL trait and the types both backends share.

pub mod traits;
pub mod types;

#[cfg(feature = "dummy")]
pub mod dummy;

// WebGL backend is only available in the browser
#[cfg(target_arch = "wasm32")]
pub mod webgl;

pub use traits::*;
pub use types::*;
