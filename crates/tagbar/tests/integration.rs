//! Integration tests for tagbar: toolbar toggles sharing one click stream,
//! and the label registry.

use tagbar::{
    Constraints, Label, LabelManager, MouseButton, Point, Rect, Size, ToggleButton,
    ToggleButtonChanged, ToggleButtonClosed, Widget,
};
use tagbar_test::Harness;

const GRID: Rect = Rect::new(0.0, 0.0, 100.0, 30.0);
const SNAP: Rect = Rect::new(120.0, 0.0, 100.0, 30.0);
const CANVAS_POINT: Point = Point::new(500.0, 400.0);

fn toolbar() -> Harness {
    let mut harness = Harness::new();
    harness
        .add(ToggleButton::new("Grid").with_test_id("grid"), GRID)
        .add(ToggleButton::new("Snap").with_test_id("snap"), SNAP)
        .mount_all();
    harness
}

fn state(harness: &Harness, id: &str) -> (bool, bool) {
    let button = harness.get::<ToggleButton>(id).expect("toggle exists");
    (button.is_checked(), button.is_open())
}

// =============================================================================
// Toggle Button Tests
// =============================================================================

#[test]
fn test_toggle_scenario_through_dispatcher() {
    let mut harness = toolbar();

    harness.click("grid");
    assert_eq!(state(&harness, "grid"), (true, true));

    harness.click("grid");
    assert_eq!(state(&harness, "grid"), (false, true));

    harness.click_at(CANVAS_POINT);
    assert_eq!(state(&harness, "grid"), (false, false));

    assert_eq!(harness.messages::<ToggleButtonChanged>().len(), 2);
    assert_eq!(harness.messages::<ToggleButtonClosed>().len(), 1);
}

#[test]
fn test_outside_click_closes_every_open_toggle() {
    let mut harness = toolbar();
    harness.click("grid").click("snap");
    assert!(state(&harness, "grid").1);
    assert!(state(&harness, "snap").1);

    harness.click_at(CANVAS_POINT);

    assert_eq!(state(&harness, "grid"), (true, false));
    assert_eq!(state(&harness, "snap"), (true, false));
}

#[test]
fn test_clicking_one_toggle_leaves_the_other_alone() {
    let mut harness = toolbar();
    harness.click("snap");

    harness.click("grid");

    assert_eq!(state(&harness, "grid"), (true, true));
    assert_eq!(state(&harness, "snap"), (true, true));
}

#[test]
fn test_outside_click_on_closed_toggles_emits_nothing() {
    let mut harness = toolbar();
    harness.click_at(CANVAS_POINT);

    assert!(harness.take_messages().is_empty());
    assert_eq!(state(&harness, "grid"), (false, false));
}

#[test]
fn test_unmounted_toggle_ignores_outside_clicks() {
    let mut harness = toolbar();
    harness.click("grid").click("snap");

    assert_eq!(harness.unmount("grid"), 1);
    harness.assert_subscriptions(1);
    assert!(!harness.is_mounted("grid"));

    harness.click_at(CANVAS_POINT);

    assert_eq!(state(&harness, "grid"), (true, true));
    assert_eq!(state(&harness, "snap"), (true, false));
}

#[test]
fn test_click_where_unmounted_toggle_sat_closes_open_toggle() {
    let mut harness = toolbar();
    harness.click("grid");
    assert_eq!(harness.unmount("snap"), 1);

    harness.click_at(SNAP.center());

    assert_eq!(state(&harness, "grid"), (true, false));
    assert_eq!(state(&harness, "snap"), (false, false));
    assert_eq!(harness.messages::<ToggleButtonChanged>().len(), 1);
    assert_eq!(harness.messages::<ToggleButtonClosed>().len(), 1);
}

#[test]
fn test_right_press_neither_toggles_nor_closes() {
    let mut harness = toolbar();
    harness.click("snap");

    harness
        .press(GRID.center(), MouseButton::Right)
        .press(CANVAS_POINT, MouseButton::Right);

    assert_eq!(state(&harness, "grid"), (false, false));
    assert_eq!(state(&harness, "snap"), (true, true));
}

#[test]
fn test_remount_resumes_outside_closing() {
    let mut harness = toolbar();
    harness.click("grid");
    harness.unmount("grid");
    assert_eq!(harness.mount("grid"), 1);

    harness.click_at(CANVAS_POINT);

    assert_eq!(state(&harness, "grid"), (true, false));
    harness.assert_subscriptions(2);
}

#[test]
fn test_click_on_edge_counts_as_inside() {
    let mut harness = toolbar();
    harness.click("grid");

    harness.click_at(Point::new(GRID.x + GRID.width, GRID.y + GRID.height));

    assert_eq!(state(&harness, "grid"), (false, true));
}

#[test]
fn test_toolbar_paints_open_label_semibold() {
    use tagbar::draw::DrawCommand;
    use tagbar::FontWeight;

    let mut harness = toolbar();
    harness.click("snap");

    let canvas = harness.paint();
    let weights: Vec<_> = canvas
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { content, style, .. } => Some((content.as_str(), style.weight)),
            DrawCommand::Rect { .. } => None,
        })
        .collect();

    assert_eq!(
        weights,
        vec![("Grid", FontWeight::Normal), ("Snap", FontWeight::Semibold)]
    );
}

#[test]
fn test_toggle_measures_within_toolbar_height() {
    let button = ToggleButton::new("Grid");
    let size = button.measure(Constraints::loose(Size::new(400.0, 32.0)));
    assert!(size.height <= 32.0);
    assert!(size.width > 0.0);
}

#[test]
fn test_harness_selectors_find_toggles() {
    let harness = toolbar();
    harness
        .assert_exists("[aria-label='Snap']")
        .assert_count("[role='checkbox']", 2);
}

// =============================================================================
// Label Registry Tests
// =============================================================================

#[test]
fn test_label_registry_scenario() {
    let mut labels = LabelManager::new();

    assert!(labels.add_label(Label::new("Bug", "red")));
    assert_eq!(labels.labels().len(), 1);

    assert!(!labels.add_label(Label::new("bug", "blue")));
    assert_eq!(labels.labels().len(), 1);

    assert!(labels.remove_label("BUG"));
    assert_eq!(labels.labels().len(), 0);
}

#[test]
fn test_label_registry_json_for_javascript() {
    let labels: LabelManager = vec![Label::new("Bug", "red"), Label::new("Docs", "#00aaff")]
        .into_iter()
        .collect();

    let json = serde_json::to_string(labels.labels()).expect("serialize");
    assert_eq!(
        json,
        r##"[{"name":"Bug","color":"red"},{"name":"Docs","color":"#00aaff"}]"##
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_outside_clicks_never_change_checked(
            self_clicks in 0usize..8,
            outside_clicks in 1usize..4,
        ) {
            let mut harness = toolbar();
            for _ in 0..self_clicks {
                harness.click("grid");
            }
            let checked = state(&harness, "grid").0;

            for _ in 0..outside_clicks {
                harness.click_at(CANVAS_POINT);
            }

            prop_assert_eq!(state(&harness, "grid"), (checked, false));
            prop_assert_eq!(checked, self_clicks % 2 == 1);
        }
    }
}
