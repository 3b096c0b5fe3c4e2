//! Test harness for tagbar widgets.

use std::any::Any;

use tagbar_core::{
    ClickDispatcher, ClickEvent, ClickTarget, Event, Message, MouseButton, Point, Rect,
    RecordingCanvas,
};

use crate::selector::Selector;

/// Drives click targets through a shared [`ClickDispatcher`].
///
/// Widgets are kept in paint order: the last one added is topmost.
pub struct Harness {
    /// Widgets under test, in paint order
    targets: Vec<Box<dyn ClickTarget>>,
    /// Ambient click stream shared by all targets
    dispatcher: ClickDispatcher,
    /// Messages emitted since the last `take_messages`
    messages: Vec<Message>,
    /// Current viewport
    viewport: Rect,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Create an empty harness with a 1280x720 viewport.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            dispatcher: ClickDispatcher::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        }
    }

    /// Set the viewport size.
    #[must_use]
    pub const fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self
    }

    /// Lay out `widget` at `bounds` and add it on top of the others.
    pub fn add(&mut self, widget: impl ClickTarget + 'static, bounds: Rect) -> &mut Self {
        let mut widget = widget;
        widget.layout(bounds);
        self.targets.push(Box::new(widget));
        self
    }

    // === Lifecycle ===

    /// Mount every widget matching `selector`. Returns how many gained a
    /// subscription; already-mounted matches are not counted.
    pub fn mount(&mut self, selector: &str) -> usize {
        let Ok(sel) = Selector::parse(selector) else {
            return 0;
        };
        let mut count = 0;
        for target in &mut self.targets {
            if !sel.matches(&**target) {
                continue;
            }
            let before = target.subscription_id();
            target.mount(&mut self.dispatcher);
            if target.subscription_id() != before {
                count += 1;
            }
        }
        count
    }

    /// Mount every widget.
    pub fn mount_all(&mut self) -> &mut Self {
        for target in &mut self.targets {
            target.mount(&mut self.dispatcher);
        }
        self
    }

    /// Unmount every widget matching `selector`. Returns how many released a
    /// subscription.
    pub fn unmount(&mut self, selector: &str) -> usize {
        let Ok(sel) = Selector::parse(selector) else {
            return 0;
        };
        let mut count = 0;
        for target in &mut self.targets {
            if sel.matches(&**target) && target.unmount(&mut self.dispatcher) {
                count += 1;
            }
        }
        count
    }

    // === Event Simulation ===

    /// Click the center of the first widget matching `selector`.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        match self.query(selector).map(|widget| widget.bounds().center()) {
            Some(center) => self.click_at(center),
            None => {
                log::warn!("click: nothing matches {selector:?}");
                self
            }
        }
    }

    /// Left-click at `position`.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.press(position, MouseButton::Left)
    }

    /// Press `button` at `position` and route the click.
    pub fn press(&mut self, position: Point, button: MouseButton) -> &mut Self {
        if !self.viewport.contains_point(&position) {
            log::debug!("press at {position:?} lands outside the viewport");
        }
        let event = Event::MouseDown { position, button };
        if let Some(click) = ClickEvent::from_event(&event) {
            let messages = self.dispatcher.route(&mut self.targets, click);
            self.messages.extend(messages);
        }
        self
    }

    // === Queries ===

    /// First widget matching `selector`.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn ClickTarget> {
        let sel = Selector::parse(selector).ok()?;
        self.targets
            .iter()
            .map(|target| &**target)
            .find(|target| sel.matches(*target))
    }

    /// All widgets matching `selector`.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn ClickTarget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.targets
            .iter()
            .map(|target| &**target)
            .filter(|target| sel.matches(*target))
            .collect()
    }

    /// First widget matching `selector`, downcast to its concrete type.
    #[must_use]
    pub fn get<T: Any>(&self, selector: &str) -> Option<&T> {
        self.query(selector)?.as_any().downcast_ref::<T>()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Whether the first widget matching `selector` holds a live subscription.
    #[must_use]
    pub fn is_mounted(&self, selector: &str) -> bool {
        self.query(selector)
            .and_then(|target| target.subscription_id())
            .is_some_and(|id| self.dispatcher.is_subscribed(id))
    }

    /// The shared dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &ClickDispatcher {
        &self.dispatcher
    }

    /// Messages of type `T` emitted so far, in emission order.
    #[must_use]
    pub fn messages<T: Any>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|message| message.downcast_ref::<T>())
            .collect()
    }

    /// Drain all emitted messages.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// Paint every widget in order.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        for target in &self.targets {
            target.paint(&mut canvas);
        }
        canvas
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert how many regions the dispatcher holds.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_subscriptions(&self, expected: usize) -> &Self {
        let actual = self.dispatcher.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} click subscriptions but found {actual}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagbar_core::{
        widget::LayoutResult, AccessibleRole, Canvas, Color, Constraints, Size, Subscription,
        SubscriptionId, TypeId, Widget,
    };

    // Counts clicks; stops propagation on self-click
    struct MockTarget {
        test_id: &'static str,
        bounds: Rect,
        subscription: Option<Subscription>,
        self_clicks: usize,
        ambient_clicks: usize,
    }

    impl MockTarget {
        fn new(test_id: &'static str) -> Self {
            Self {
                test_id,
                bounds: Rect::default(),
                subscription: None,
                self_clicks: 0,
                ambient_clicks: 0,
            }
        }
    }

    impl Widget for MockTarget {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(100.0, 30.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.bounds = b;
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(self.bounds, Color::WHITE);
        }
        fn event(&mut self, _: &Event) -> Option<Message> {
            None
        }
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Checkbox
        }
        fn test_id(&self) -> Option<&str> {
            Some(self.test_id)
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    impl ClickTarget for MockTarget {
        fn mount(&mut self, dispatcher: &mut ClickDispatcher) {
            if self.subscription.is_none() {
                self.subscription = Some(dispatcher.subscribe(self.bounds));
            }
        }
        fn unmount(&mut self, dispatcher: &mut ClickDispatcher) -> bool {
            self.subscription
                .take()
                .is_some_and(|sub| dispatcher.unsubscribe(sub))
        }
        fn subscription_id(&self) -> Option<SubscriptionId> {
            self.subscription.as_ref().map(Subscription::id)
        }
        fn on_self_click(&mut self, event: &mut ClickEvent) -> Option<Message> {
            event.stop_propagation();
            self.self_clicks += 1;
            Some(Box::new(self.test_id))
        }
        fn on_ambient_click(&mut self, _: &ClickEvent) -> Option<Message> {
            self.ambient_clicks += 1;
            None
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn two_targets() -> Harness {
        let mut harness = Harness::new();
        harness
            .add(MockTarget::new("a"), Rect::new(0.0, 0.0, 100.0, 30.0))
            .add(MockTarget::new("b"), Rect::new(200.0, 0.0, 100.0, 30.0));
        harness
    }

    fn counts(harness: &Harness, id: &str) -> (usize, usize) {
        let mock = harness.get::<MockTarget>(id).expect("mock exists");
        (mock.self_clicks, mock.ambient_clicks)
    }

    #[test]
    fn test_harness_exists() {
        let harness = two_targets();
        assert!(harness.exists("[data-testid='a']"));
        assert!(!harness.exists("[data-testid='nonexistent']"));
        assert!(!harness.exists("[not valid"));
    }

    #[test]
    #[should_panic(expected = "Expected widget matching")]
    fn test_harness_assert_exists_fails() {
        Harness::new().assert_exists("[data-testid='missing']");
    }

    #[test]
    fn test_harness_assert_count_by_role() {
        two_targets().assert_count("[role='checkbox']", 2);
    }

    #[test]
    fn test_harness_mount_and_unmount() {
        let mut harness = two_targets();
        assert_eq!(harness.mount("a"), 1);
        harness.assert_subscriptions(1);
        assert!(harness.is_mounted("a"));
        assert!(!harness.is_mounted("b"));

        assert_eq!(harness.unmount("a"), 1);
        assert_eq!(harness.unmount("a"), 0);
        harness.assert_subscriptions(0);
    }

    #[test]
    fn test_harness_click_routes_self_click() {
        let mut harness = two_targets();
        harness.mount_all();

        harness.click("a");

        assert_eq!(counts(&harness, "a"), (1, 0));
        assert_eq!(counts(&harness, "b"), (0, 0));
        assert_eq!(harness.messages::<&'static str>(), vec![&"a"]);
    }

    #[test]
    fn test_harness_click_outside_reaches_all() {
        let mut harness = two_targets();
        harness.mount_all();

        harness.click_at(Point::new(600.0, 400.0));

        assert_eq!(counts(&harness, "a"), (0, 1));
        assert_eq!(counts(&harness, "b"), (0, 1));
    }

    #[test]
    fn test_harness_click_missing_is_noop() {
        let mut harness = two_targets();
        harness.mount_all();
        harness.click("missing");
        assert!(harness.take_messages().is_empty());
        assert_eq!(counts(&harness, "a"), (0, 0));
    }

    #[test]
    fn test_harness_mount_counts_only_new_subscriptions() {
        let mut harness = two_targets();
        assert_eq!(harness.mount("a"), 1);
        assert_eq!(harness.mount("a"), 0);
        assert_eq!(harness.mount("[role='checkbox']"), 1);
        harness.assert_subscriptions(2);
    }

    #[test]
    fn test_harness_click_on_unmounted_widget_is_ignored() {
        let mut harness = two_targets();
        harness.click("b");
        assert!(harness.take_messages().is_empty());
        assert_eq!(counts(&harness, "b"), (0, 0));
    }

    #[test]
    fn test_harness_right_press_is_ignored() {
        let mut harness = two_targets();
        harness.mount_all();

        harness
            .press(Point::new(10.0, 10.0), MouseButton::Right)
            .press(Point::new(600.0, 400.0), MouseButton::Right);

        assert!(harness.take_messages().is_empty());
        assert_eq!(counts(&harness, "a"), (0, 0));
        assert_eq!(counts(&harness, "b"), (0, 0));
    }

    #[test]
    fn test_harness_take_messages_drains() {
        let mut harness = two_targets();
        harness.mount_all();
        harness.click("b");
        assert_eq!(harness.take_messages().len(), 1);
        assert!(harness.messages::<&'static str>().is_empty());
    }

    #[test]
    fn test_harness_paint_all() {
        let harness = two_targets().viewport(400.0, 40.0);
        assert_eq!(harness.paint().command_count(), 2);
    }
}
