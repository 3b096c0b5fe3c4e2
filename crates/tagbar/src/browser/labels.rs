//! Label registry exposed to JavaScript.

use tagbar_core::{Label, LabelManager};
use wasm_bindgen::prelude::*;

use super::BrowserError;

/// JavaScript handle to a [`LabelManager`].
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct LabelRegistry {
    manager: LabelManager,
}

#[wasm_bindgen]
impl LabelRegistry {
    /// Create an empty registry.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label. `false` if the name is taken, ignoring case.
    pub fn add_label(&mut self, name: &str, color: &str) -> bool {
        self.manager.add_label(Label::new(name, color))
    }

    /// Remove a label by name, ignoring case. `true` if one was removed.
    pub fn remove_label(&mut self, name: &str) -> bool {
        self.manager.remove_label(name)
    }

    /// Recolor a label. `false` if no such label.
    pub fn change_color(&mut self, name: &str, color: &str) -> bool {
        self.manager.change_color(name, color)
    }

    /// Whether a label with this name exists, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.manager.contains(name)
    }

    /// Color of the named label.
    pub fn color_of(&self, name: &str) -> Option<String> {
        self.manager.get(name).map(|label| label.color().to_string())
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.manager.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.manager.is_empty()
    }

    /// Label names in insertion order.
    pub fn names(&self) -> js_sys::Array {
        self.manager
            .iter()
            .map(|label| JsValue::from_str(label.name()))
            .collect()
    }

    /// Labels as a JSON array of `{"name", "color"}` objects.
    pub fn labels_json(&self) -> Result<String, JsValue> {
        let json = serde_json::to_string(self.manager.labels()).map_err(BrowserError::from)?;
        Ok(json)
    }
}

impl LabelRegistry {
    /// The underlying registry.
    pub fn manager(&self) -> &LabelManager {
        &self.manager
    }
}
