//! tagbar: toolbar toggle buttons that close on an outside click, and a
//! label registry with case-insensitive unique names.
//!
//! Native code drives widgets through a [`ClickDispatcher`]; on `wasm32` the
//! `browser` module binds the same state machine to real DOM elements.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { ToolbarToggle, LabelRegistry } from './tagbar.js';
//!
//! async function main() {
//!     await init();
//!     const grid = new ToolbarToggle('Grid');
//!     grid.mount('toolbar');
//!
//!     const labels = new LabelRegistry();
//!     labels.add_label('Bug', 'red');
//!     labels.add_label('bug', 'blue'); // false
//! }
//! ```

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub use tagbar_core::*;
pub use tagbar_widgets as widgets;
pub use tagbar_widgets::{ToggleButton, ToggleButtonChanged, ToggleButtonClosed, ToggleState};

#[cfg(target_arch = "wasm32")]
pub mod browser;
