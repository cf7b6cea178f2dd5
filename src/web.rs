//! Web-specific functionality for running the demo in a browser.
//!
//! Thin helpers over `web_sys` for finding page elements and wiring
//! click handlers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::backend::traits::{BackendError, BackendResult};

/// Get the page document
pub fn document() -> BackendResult<Document> {
    web_sys::window()
        .ok_or_else(|| BackendError::Dom("no global window exists".into()))?
        .document()
        .ok_or_else(|| BackendError::Dom("no document exists".into()))
}

/// Find an element by id
pub fn element_by_id(document: &Document, id: &str) -> BackendResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BackendError::Dom(format!("no element with id `{}`", id)))
}

/// Find a canvas element by id
pub fn canvas_by_id(document: &Document, id: &str) -> BackendResult<HtmlCanvasElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BackendError::Dom(format!("element `{}` is not a canvas", id)))
}

/// Run `handler` on every click of `element`.
///
/// The listener stays registered for the lifetime of the page.
pub fn on_click<F>(element: &Element, handler: F) -> BackendResult<()>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(handler);
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| BackendError::Dom(format!("failed to add click listener: {:?}", e)))?;
    closure.forget();
    Ok(())
}

/// Log a message to the browser console
#[wasm_bindgen]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Log an error to the browser console
#[wasm_bindgen]
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}
