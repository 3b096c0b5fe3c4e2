//! Browser runtime for tagbar.
//!
//! Binds [`ToggleState`](tagbar_widgets::ToggleState) to DOM elements and
//! exposes the label registry to JavaScript.

pub mod error;
pub mod events;
pub mod labels;
pub mod listener;
pub mod toggle;

pub use error::BrowserError;
pub use labels::LabelRegistry;
pub use listener::ClickListener;
pub use toggle::ToolbarToggle;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // A second call finds the logger already set.
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::info!("tagbar initialized");
    }
}

pub(crate) fn document() -> Result<web_sys::Document, BrowserError> {
    web_sys::window()
        .ok_or(BrowserError::NoWindow)?
        .document()
        .ok_or(BrowserError::NoDocument)
}
