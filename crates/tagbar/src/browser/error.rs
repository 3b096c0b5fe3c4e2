//! Errors raised at the DOM boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while talking to the DOM.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// No global `window`
    #[error("no window")]
    NoWindow,
    /// Window has no document
    #[error("no document")]
    NoDocument,
    /// No element with the given id
    #[error("element '{0}' not found")]
    ElementNotFound(String),
    /// A DOM call threw
    #[error("javascript error: {0}")]
    Js(String),
    /// Serialization for JavaScript failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BrowserError> for JsValue {
    fn from(error: BrowserError) -> Self {
        Self::from_str(&error.to_string())
    }
}
