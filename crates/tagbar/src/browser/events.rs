//! Browser event handling - converts DOM mouse events to tagbar clicks.

use tagbar_core::{ClickEvent, MouseButton, Point};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

/// Convert a `click` event to a [`ClickEvent`] in viewport coordinates.
pub fn mouse_event_to_click(event: &MouseEvent) -> ClickEvent {
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    ClickEvent::new(position).with_button(MouseButton::from_dom(event.button()))
}

/// Whether the event's target lies outside `root`.
///
/// Events without a node target (e.g. dispatched on `window`) count as
/// outside.
pub fn is_outside(root: &Node, event: &MouseEvent) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    !root.contains(target.as_ref())
}
