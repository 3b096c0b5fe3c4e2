//! Ambient click stream and outside-click dispatch.
//!
//! A single [`ClickDispatcher`] owns every registered interactive region.
//! Widgets subscribe when mounted and receive an owned [`Subscription`]; the
//! same handle is handed back on unmount, so a widget can never unsubscribe
//! with a handle other than the one it was given.
//!
//! Delivery of one click happens in two phases:
//!
//! 1. **Self-click**: the topmost mounted target whose bounds contain the
//!    click gets [`ClickTarget::on_self_click`]. A target that stops propagation ends
//!    delivery there.
//! 2. **Ambient**: if propagation was not stopped, every subscribed target
//!    whose region does not contain the click gets
//!    [`ClickTarget::on_ambient_click`].
//!
//! # Examples
//!
//! ```
//! use tagbar_core::{ClickDispatcher, ClickEvent, Point, Rect};
//!
//! let mut dispatcher = ClickDispatcher::new();
//! let sub = dispatcher.subscribe(Rect::new(0.0, 0.0, 100.0, 30.0));
//!
//! let inside = ClickEvent::new(Point::new(10.0, 10.0));
//! assert!(dispatcher.outside(&inside).is_empty());
//!
//! let elsewhere = ClickEvent::new(Point::new(300.0, 300.0));
//! assert_eq!(dispatcher.outside(&elsewhere), vec![sub.id()]);
//!
//! assert!(dispatcher.unsubscribe(sub));
//! assert!(dispatcher.is_empty());
//! ```

use crate::event::{Event, MouseButton};
use crate::geometry::{Point, Rect};
use crate::widget::{Message, Widget};
use std::any::Any;
use std::collections::BTreeMap;

/// Identifier of a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Owned handle to a region registered on a [`ClickDispatcher`].
///
/// Not `Clone`; unsubscribing consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a subscription must be handed back to the dispatcher to unsubscribe"]
pub struct Subscription {
    id: SubscriptionId,
}

impl Subscription {
    /// Identifier of the registered region.
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// A single click travelling through the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    position: Point,
    button: MouseButton,
    propagation_stopped: bool,
}

impl ClickEvent {
    /// Create a left-button click at `position`.
    #[must_use]
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Left,
            propagation_stopped: false,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Convert a pointer event into a click; only `MouseDown` qualifies.
    #[must_use]
    pub const fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::MouseDown { position, button } => {
                Some(Self::new(*position).with_button(*button))
            }
            Event::MouseMove { .. } | Event::MouseUp { .. } => None,
        }
    }

    /// Click position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Button that was pressed.
    #[must_use]
    pub const fn button(&self) -> MouseButton {
        self.button
    }

    /// Keep this click from reaching the ambient phase.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    #[must_use]
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// A widget that takes part in click dispatch.
pub trait ClickTarget: Widget {
    /// Whether `position` lands on this target's interactive region.
    fn hit_test(&self, position: Point) -> bool {
        self.bounds().contains_point(&position)
    }

    /// Subscribe to the ambient click stream with the current bounds.
    fn mount(&mut self, dispatcher: &mut ClickDispatcher);

    /// Hand the mount-time subscription back. `false` if not mounted.
    fn unmount(&mut self, dispatcher: &mut ClickDispatcher) -> bool;

    /// Subscription held while mounted, if any.
    fn subscription_id(&self) -> Option<SubscriptionId>;

    /// Click landed on this target.
    fn on_self_click(&mut self, event: &mut ClickEvent) -> Option<Message>;

    /// Click landed outside this target's region.
    fn on_ambient_click(&mut self, event: &ClickEvent) -> Option<Message>;

    /// Downcast support for callers holding `dyn ClickTarget`.
    fn as_any(&self) -> &dyn Any;
}

/// Process-wide registry of interactive regions.
#[derive(Debug, Default)]
pub struct ClickDispatcher {
    regions: BTreeMap<SubscriptionId, Rect>,
    next_id: u64,
}

impl ClickDispatcher {
    /// Create an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interactive region.
    pub fn subscribe(&mut self, region: Rect) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, region);
        log::debug!("click subscription {} registered at {region:?}", id.0);
        Subscription { id }
    }

    /// Remove a region. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let removed = self.regions.remove(&subscription.id).is_some();
        if removed {
            log::debug!("click subscription {} removed", subscription.id.0);
        } else {
            log::warn!(
                "click subscription {} was not registered",
                subscription.id.0
            );
        }
        removed
    }

    /// Move or resize a registered region (after layout).
    pub fn update_region(&mut self, subscription: &Subscription, region: Rect) -> bool {
        match self.regions.get_mut(&subscription.id) {
            Some(slot) => {
                *slot = region;
                true
            }
            None => false,
        }
    }

    /// Whether `id` is currently registered.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Region registered under `id`.
    #[must_use]
    pub fn region(&self, id: SubscriptionId) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Subscribers whose region does not contain the click, in ascending id
    /// order. Empty once propagation has been stopped.
    #[must_use]
    pub fn outside(&self, event: &ClickEvent) -> Vec<SubscriptionId> {
        if event.is_propagation_stopped() {
            return Vec::new();
        }
        self.regions
            .iter()
            .filter(|(_, region)| !region.contains_point(&event.position))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Deliver one click to `targets`.
    ///
    /// `targets` is in paint order; the last one is topmost for hit testing.
    /// Only mounted targets take part, and only primary-button clicks are
    /// delivered at all.
    pub fn route(&self, targets: &mut [Box<dyn ClickTarget>], event: ClickEvent) -> Vec<Message> {
        let mut event = event;
        let mut messages = Vec::new();

        if event.button != MouseButton::Left {
            log::debug!("ignoring {:?} button click", event.button);
            return messages;
        }

        for target in targets.iter_mut().rev() {
            if event.is_propagation_stopped() {
                break;
            }
            let mounted = target
                .subscription_id()
                .is_some_and(|id| self.is_subscribed(id));
            if mounted && target.hit_test(event.position) {
                messages.extend(target.on_self_click(&mut event));
            }
        }

        let outside = self.outside(&event);
        if outside.is_empty() {
            return messages;
        }

        for target in targets.iter_mut() {
            let notify = target
                .subscription_id()
                .is_some_and(|id| outside.binary_search(&id).is_ok());
            if notify {
                messages.extend(target.on_ambient_click(&event));
            }
        }

        messages
    }
}
