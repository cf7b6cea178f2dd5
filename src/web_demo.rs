//! Web demo entry point
//!
//! This module provides the wasm-bindgen entry point and the app that
//! connects the page buttons to the renderer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::{
    backend::webgl::WebGlBackend,
    init_web_logging,
    web::{canvas_by_id, console_error, console_log, document, element_by_id, on_click},
    DemoConfig, DemoError, DrawMode, FrameReport, TriangleRenderer,
};

/// The running demo: one renderer shared by the three click handlers
pub struct DemoApp {
    renderer: Rc<RefCell<TriangleRenderer<WebGlBackend>>>,
}

impl DemoApp {
    /// Build the program and renderer on `backend` and wire the mode
    /// buttons found in `document`.
    pub fn new(
        backend: WebGlBackend,
        document: &Document,
        config: &DemoConfig,
    ) -> Result<Self, DemoError> {
        let renderer = TriangleRenderer::with_default_program(backend)?
            .with_clear_color(config.clear_color);
        let renderer = Rc::new(RefCell::new(renderer));

        for mode in DrawMode::ALL {
            let button = element_by_id(document, config.button_id(mode))?;
            let renderer = Rc::clone(&renderer);
            on_click(&button, move || {
                let mut renderer = renderer.borrow_mut();
                renderer.set_mode(mode);
                log::info!("Draw mode: {}", mode);
                renderer.render();
            })?;
        }

        Ok(Self { renderer })
    }

    /// Look up the page document and canvas named by `config`, then build the app.
    pub fn from_config(config: &DemoConfig) -> Result<Self, DemoError> {
        let document = document()?;
        let canvas = canvas_by_id(&document, &config.canvas_id)?;
        let backend = WebGlBackend::from_canvas(&canvas)?;
        Self::new(backend, &document, config)
    }

    pub fn mode(&self) -> DrawMode {
        self.renderer.borrow().mode()
    }

    pub fn render(&self) -> FrameReport {
        self.renderer.borrow_mut().render()
    }
}

/// Main entry point for web - called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let config = DemoConfig::default();
    init_web_logging(config.log_level);
    console_log("=== Triangle Modes ===");

    let app = DemoApp::from_config(&config).map_err(|e| {
        console_error(&format!("Demo failed to start: {}", e));
        JsValue::from_str(&e.to_string())
    })?;

    let report = app.render();
    log::info!("First frame drawn as {} ({} vertices)", report.mode, report.vertex_count);
    Ok(())
}
