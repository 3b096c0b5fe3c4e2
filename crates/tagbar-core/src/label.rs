//! Named, colored tags and the registry that keeps their names unique.
//!
//! Names compare case-insensitively: `"Bug"`, `"bug"` and `"BUG"` are the same
//! label. The original spelling is kept for display.
//!
//! # Examples
//!
//! ```
//! use tagbar_core::{Label, LabelManager};
//!
//! let mut labels = LabelManager::new();
//! assert!(labels.add_label(Label::new("Bug", "red")));
//! assert!(!labels.add_label(Label::new("bug", "blue")));
//! assert_eq!(labels.len(), 1);
//! assert_eq!(labels.labels()[0].color(), "red");
//!
//! assert!(labels.remove_label("BUG"));
//! assert!(labels.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lowercase form of a label name used for uniqueness checks.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// A named, colored tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    name: String,
    color: String,
}

impl Label {
    /// Create a label. The name is stored verbatim; the color is not validated.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Name as given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Name used for uniqueness comparisons.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Overwrite the color.
    pub fn change_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

/// Ordered collection of labels with case-insensitively unique names.
///
/// `names` always holds exactly the normalized names of `labels`; every
/// mutation updates both.
#[derive(Debug, Clone, Default)]
pub struct LabelManager {
    labels: Vec<Label>,
    names: HashSet<String>,
}

impl LabelManager {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Append `label` unless one with the same normalized name exists.
    ///
    /// Returns `false` and leaves the registry untouched on a duplicate.
    pub fn add_label(&mut self, label: Label) -> bool {
        let normalized = label.normalized_name();
        if self.names.contains(&normalized) {
            log::debug!("label {:?} rejected: name already registered", label.name);
            return false;
        }

        log::debug!("label {:?} added with color {:?}", label.name, label.color);
        self.names.insert(normalized);
        self.labels.push(label);
        true
    }

    /// Remove the label whose normalized name matches `name`.
    ///
    /// Returns `true` if the registry shrank.
    pub fn remove_label(&mut self, name: &str) -> bool {
        let normalized = normalize_name(name);
        if !self.names.remove(&normalized) {
            return false;
        }

        let before = self.labels.len();
        self.labels
            .retain(|label| label.normalized_name() != normalized);
        log::debug!("label {name:?} removed");
        self.labels.len() < before
    }

    /// Look up a label by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Label> {
        let normalized = normalize_name(name);
        self.labels
            .iter()
            .find(|label| label.normalized_name() == normalized)
    }

    /// Whether a label with this name exists, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_name(name))
    }

    /// Change the color of the label named `name`.
    ///
    /// Returns `false` if no such label exists.
    pub fn change_color(&mut self, name: &str, color: impl Into<String>) -> bool {
        let normalized = normalize_name(name);
        match self
            .labels
            .iter_mut()
            .find(|label| label.normalized_name() == normalized)
        {
            Some(label) => {
                label.change_color(color);
                true
            }
            None => false,
        }
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }
}

impl<'a> IntoIterator for &'a LabelManager {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects labels, keeping the first of any case-insensitive duplicates.
impl FromIterator<Label> for LabelManager {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut manager = Self::new();
        for label in iter {
            manager.add_label(label);
        }
        manager
    }
}
