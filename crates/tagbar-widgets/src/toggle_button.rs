//! Checkbox-style toolbar button that opens on click and closes on a click
//! anywhere else.
//!
//! The open/closed logic lives in [`ToggleState`] so the canvas widget here
//! and the DOM binding in the `tagbar` crate share one state machine:
//!
//! | state  | self-click                  | outside click |
//! |--------|-----------------------------|---------------|
//! | closed | open, `checked` flips       | no change     |
//! | open   | stays open, `checked` flips | closed        |
//!
//! An outside click never touches `checked`.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tagbar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, ClickDispatcher, ClickEvent, ClickTarget, Color, ColorParseError, Constraints, Event,
    FontWeight, Message, MouseButton, Point, Rect, Size, Subscription, SubscriptionId, TextStyle,
    TypeId, Widget,
};

/// Open/checked state of a toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleState {
    checked: bool,
    open: bool,
}

impl ToggleState {
    /// Closed and unchecked.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checked: false,
            open: false,
        }
    }

    /// Closed, with the given checked state.
    #[must_use]
    pub const fn with_checked(checked: bool) -> Self {
        Self {
            checked,
            open: false,
        }
    }

    /// Whether the embedded checkbox is checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the button is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Click on the button itself.
    pub fn self_click(&mut self) {
        self.checked = !self.checked;
        self.open = true;
    }

    /// Click somewhere else. Returns `true` if this closed the button.
    pub fn outside_click(&mut self) -> bool {
        // `checked` stays as is; resetting it here is an open product question.
        std::mem::replace(&mut self.open, false)
    }
}

/// Message emitted when the button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButtonChanged {
    /// New checked state
    pub checked: bool,
    /// Always `true` after a self-click
    pub open: bool,
}

/// Message emitted when an outside click closes the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButtonClosed;

/// Checkbox-style toolbar button.
#[derive(Debug)]
pub struct ToggleButton {
    /// Open/checked state
    state: ToggleState,
    /// Label text, fixed at creation
    label: String,
    /// Checkbox size
    box_size: f32,
    /// Inner padding
    padding: f32,
    /// Spacing between box and label
    spacing: f32,
    /// Background while closed
    background_color: Color,
    /// Background while hovered and closed
    hover_color: Color,
    /// Background while open
    open_color: Color,
    /// Unchecked box color
    box_color: Color,
    /// Checked box color
    checked_color: Color,
    /// Check mark color
    check_color: Color,
    /// Label color
    label_color: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Whether hovered
    hovered: bool,
    /// Ambient click subscription, held while mounted
    subscription: Option<Subscription>,
}

impl ToggleButton {
    /// Create an unmounted, closed, unchecked button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let accent = Color::new(0.2, 0.47, 0.96, 1.0);
        Self {
            state: ToggleState::new(),
            label: label.into(),
            box_size: 16.0,
            padding: 6.0,
            spacing: 6.0,
            background_color: Color::TRANSPARENT,
            hover_color: Color::new(0.93, 0.93, 0.93, 1.0),
            open_color: accent.lerp(&Color::WHITE, 0.8),
            box_color: Color::new(0.8, 0.8, 0.8, 1.0),
            checked_color: accent,
            check_color: Color::WHITE,
            label_color: Color::BLACK,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            hovered: false,
            subscription: None,
        }
    }

    /// Set the initial checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.state = ToggleState::with_checked(checked);
        self
    }

    /// Set checkbox size.
    #[must_use]
    pub fn box_size(mut self, size: f32) -> Self {
        self.box_size = size.max(8.0);
        self
    }

    /// Set inner padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set the accent color (checked box, open background tint).
    #[must_use]
    pub fn accent(mut self, color: Color) -> Self {
        self.checked_color = color;
        self.open_color = color.lerp(&Color::WHITE, 0.8);
        self
    }

    /// Set the accent color from a hex string.
    pub fn accent_hex(self, hex: &str) -> Result<Self, ColorParseError> {
        Ok(self.accent(Color::from_hex(hex)?))
    }

    /// Set label color.
    #[must_use]
    pub const fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ToggleState {
        self.state
    }

    /// Whether the checkbox is checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Whether the button is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Whether the button currently listens for outside clicks.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to the ambient click stream with the current bounds.
    ///
    /// A second mount while already mounted is ignored.
    pub fn mount(&mut self, dispatcher: &mut ClickDispatcher) {
        if self.subscription.is_some() {
            log::warn!("toggle button {:?} is already mounted", self.label);
            return;
        }
        self.subscription = Some(dispatcher.subscribe(self.bounds));
        log::debug!("toggle button {:?} mounted", self.label);
    }

    /// Hand the mount-time subscription back to the dispatcher.
    ///
    /// Returns `false` if the button was not mounted.
    pub fn unmount(&mut self, dispatcher: &mut ClickDispatcher) -> bool {
        let Some(subscription) = self.subscription.take() else {
            return false;
        };
        log::debug!("toggle button {:?} unmounted", self.label);
        dispatcher.unsubscribe(subscription)
    }

    /// Push the current bounds to the dispatcher after a layout pass.
    pub fn sync_region(&self, dispatcher: &mut ClickDispatcher) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|subscription| dispatcher.update_region(subscription, self.bounds))
    }

    /// Click landed on the button: flip `checked`, open, stop propagation.
    pub fn on_self_click(&mut self, event: &mut ClickEvent) -> ToggleButtonChanged {
        event.stop_propagation();
        self.state.self_click();
        log::debug!(
            "toggle button {:?} clicked: checked={} open={}",
            self.label,
            self.state.is_checked(),
            self.state.is_open()
        );
        ToggleButtonChanged {
            checked: self.state.is_checked(),
            open: self.state.is_open(),
        }
    }

    /// Click landed anywhere. Closes the button if it is mounted, open, and
    /// the click is outside its bounds.
    pub fn on_ambient_click(&mut self, event: &ClickEvent) -> Option<ToggleButtonClosed> {
        if self.subscription.is_none() || self.bounds.contains_point(&event.position()) {
            return None;
        }
        if self.state.outside_click() {
            log::debug!("toggle button {:?} closed by outside click", self.label);
            Some(ToggleButtonClosed)
        } else {
            None
        }
    }

    fn box_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.padding,
            self.bounds.y + (self.bounds.height - self.box_size) / 2.0,
            self.box_size,
            self.box_size,
        )
    }

    fn background(&self) -> Color {
        if self.state.is_open() {
            self.open_color
        } else if self.hovered {
            self.hover_color
        } else {
            self.background_color
        }
    }
}

impl Widget for ToggleButton {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        // ~8px per character
        let label_width = self.label.chars().count() as f32 * 8.0;
        let width = self.padding.mul_add(2.0, self.box_size + self.spacing + label_width);
        let height = self.padding.mul_add(2.0, self.box_size.max(16.0));
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background());

        let box_rect = self.box_rect();
        if self.state.is_checked() {
            canvas.fill_rect(box_rect, self.checked_color);
            canvas.fill_rect(box_rect.inset(self.box_size * 0.25), self.check_color);
        } else {
            canvas.fill_rect(box_rect, Color::WHITE);
            canvas.stroke_rect(box_rect, self.box_color, 1.0);
        }

        let style = TextStyle {
            color: self.label_color,
            weight: if self.state.is_open() {
                FontWeight::Semibold
            } else {
                FontWeight::Normal
            },
            ..TextStyle::default()
        };
        let label_x = box_rect.x + self.box_size + self.spacing;
        let label_y = self.bounds.y + (self.bounds.height - style.size) / 2.0;
        canvas.draw_text(&self.label, Point::new(label_x, label_y), &style);
    }

    /// Direct pointer input: a left press inside the bounds is a self-click.
    /// Outside clicks arrive through the dispatcher instead.
    fn event(&mut self, event: &Event) -> Option<Message> {
        match event {
            Event::MouseMove { position } => {
                self.hovered = self.bounds.contains_point(position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                let mut click = ClickEvent::new(*position);
                Some(Box::new(self.on_self_click(&mut click)))
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value
            .as_deref()
            .or(Some(self.label.as_str()).filter(|label| !label.is_empty()))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Checkbox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl ClickTarget for ToggleButton {
    fn mount(&mut self, dispatcher: &mut ClickDispatcher) {
        Self::mount(self, dispatcher);
    }

    fn unmount(&mut self, dispatcher: &mut ClickDispatcher) -> bool {
        Self::unmount(self, dispatcher)
    }

    fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    fn on_self_click(&mut self, event: &mut ClickEvent) -> Option<Message> {
        Some(Box::new(Self::on_self_click(self, event)))
    }

    fn on_ambient_click(&mut self, event: &ClickEvent) -> Option<Message> {
        Self::on_ambient_click(self, event).map(|closed| Box::new(closed) as Message)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
