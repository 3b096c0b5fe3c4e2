//! Toolbar widget implementations for tagbar.

pub mod toggle_button;

pub use toggle_button::{ToggleButton, ToggleButtonChanged, ToggleButtonClosed, ToggleState};
