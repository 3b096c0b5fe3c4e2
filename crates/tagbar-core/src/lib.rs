//! Core types and traits for tagbar.
//!
//! This crate provides the foundations shared by the widgets and the browser
//! runtime:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`ClickEvent`]
//! - The ambient click stream: [`ClickDispatcher`], [`ClickTarget`]
//! - The label registry: [`Label`], [`LabelManager`]

mod canvas;
mod color;
mod constraints;
mod dispatch;
pub mod draw;
mod event;
mod geometry;
mod label;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use dispatch::{ClickDispatcher, ClickEvent, ClickTarget, Subscription, SubscriptionId};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use label::{normalize_name, Label, LabelManager};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, Message, TextStyle, TypeId, Widget,
};
