//! Testing harness for tagbar.
//!
//! Drives [`ClickTarget`](tagbar_core::ClickTarget) widgets through a real
//! [`ClickDispatcher`](tagbar_core::ClickDispatcher) without a browser.
//!
//! # Example
//!
//! ```ignore
//! use tagbar_test::Harness;
//!
//! let mut harness = Harness::new();
//! harness.add(my_widget, Rect::new(0.0, 0.0, 100.0, 30.0));
//! harness.mount_all();
//! harness.click("[data-testid='filters']");
//! harness.assert_count("[role='checkbox']", 1);
//! ```

#![allow(clippy::missing_panics_doc)]

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError};
