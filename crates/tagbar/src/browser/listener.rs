//! RAII `click` listener registration.

use super::BrowserError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

/// A `click` listener that stays registered for as long as the value lives.
///
/// The closure registered at attach time is the one removed on drop.
pub struct ClickListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl ClickListener {
    /// Register `handler` for `click` events on `target`.
    pub fn attach(
        target: &EventTarget,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Result<Self, BrowserError> {
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            callback,
        })
    }

    /// Register `handler` for every `click` that bubbles to the document.
    pub fn on_document(handler: impl FnMut(MouseEvent) + 'static) -> Result<Self, BrowserError> {
        let document = super::document()?;
        Self::attach(&document, handler)
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove click listener: {err:?}");
        }
    }
}
