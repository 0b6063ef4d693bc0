//! Card style scenarios: settings document in, rendered classes out.

use topic_cards::export::CardClasses;
use topic_cards::models::{CategoryId, Variant, Viewport};
use topic_cards::services::{resolve, resolve_all};

mod fixtures;
use fixtures::*;

/// Renders the card classes a category gets on a viewport.
fn render(yaml: &str, category: u64, viewport: Viewport) -> CardClasses {
    let settings = settings(yaml);
    let style = resolve(CategoryId::new(category), viewport, &settings.style);
    CardClasses::render(&style, &settings.style)
}

fn assert_style(classes: &CardClasses, expected: &str) {
    assert!(
        classes
            .container
            .contains(&format!("topic-cards-list--{expected}")),
        "container should be {expected}: {:?}",
        classes.container
    );
    assert!(
        classes.card.contains(&format!("topic-card--{expected}")),
        "card should be {expected}: {:?}",
        classes.card
    );
}

fn has(classes: &CardClasses, class: &str) -> bool {
    classes.card.iter().any(|c| c == class)
}

// ============================================================================
// Desktop membership + mobile token combinations
// ============================================================================

#[test]
fn test_desktop_list_mobile_list() {
    let yaml = desktop_membership_yaml(5, "list", "list");
    assert_style(&render(&yaml, 5, Viewport::Desktop), "list");
    assert_style(&render(&yaml, 5, Viewport::Mobile), "list");
}

#[test]
fn test_desktop_list_mobile_grid() {
    let yaml = desktop_membership_yaml(5, "list", "grid");
    assert_style(&render(&yaml, 5, Viewport::Desktop), "list");
    assert_style(&render(&yaml, 5, Viewport::Mobile), "grid");
}

#[test]
fn test_desktop_grid_mobile_list() {
    let yaml = desktop_membership_yaml(5, "grid", "list");
    assert_style(&render(&yaml, 5, Viewport::Desktop), "grid");
    assert_style(&render(&yaml, 5, Viewport::Mobile), "list");
}

#[test]
fn test_desktop_grid_mobile_grid() {
    let yaml = desktop_membership_yaml(5, "grid", "grid");
    assert_style(&render(&yaml, 5, Viewport::Desktop), "grid");
    assert_style(&render(&yaml, 5, Viewport::Mobile), "grid");
}

// ============================================================================
// Membership-only examples
// ============================================================================

#[test]
fn test_list_on_both_viewports_via_membership() {
    let yaml = "\
list_view_categories: \"5\"
grid_view_categories: \"\"
mobile_list_view_categories: \"5\"
mobile_grid_view_categories: \"\"
";
    assert_style(&render(yaml, 5, Viewport::Desktop), "list");
    assert_style(&render(yaml, 5, Viewport::Mobile), "list");
}

#[test]
fn test_grid_desktop_none_mobile() {
    let yaml = "\
list_view_categories: \"\"
grid_view_categories: \"7\"
mobile_list_view_categories: \"\"
mobile_grid_view_categories: \"\"
";
    assert_style(&render(yaml, 7, Viewport::Desktop), "grid");
    assert!(render(yaml, 7, Viewport::Mobile).is_empty());

    let styles = resolve_all(CategoryId::new(7), &settings(yaml).style);
    assert_eq!(styles.desktop.variant, Variant::Grid);
    assert_eq!(styles.mobile.variant, Variant::None);
}

#[test]
fn test_empty_lists_with_token_use_token() {
    let yaml = "\
list_view_categories: \"\"
grid_view_categories: \"\"
card_style_desktop: grid
empty_category_fallback: none
";
    assert_style(&render(yaml, 4, Viewport::Desktop), "grid");
    assert!(render(yaml, 4, Viewport::Mobile).is_empty());
}

// ============================================================================
// Per-category styling
// ============================================================================

#[test]
fn test_per_category_styling() {
    let yaml = per_category_yaml();

    assert_style(&render(&yaml, LIST_CATEGORY, Viewport::Desktop), "list");
    assert_style(&render(&yaml, GRID_CATEGORY, Viewport::Desktop), "grid");

    let unconfigured = render(&yaml, UNCONFIGURED_CATEGORY, Viewport::Desktop);
    assert!(unconfigured.is_empty(), "{unconfigured:?}");
}

#[test]
fn test_category_in_both_lists_prefers_grid() {
    let yaml = "\
list_view_categories: \"9\"
grid_view_categories: \"9\"
card_style_mobile: grid
";
    let classes = render(yaml, 9, Viewport::Desktop);
    assert_style(&classes, "grid");
    assert!(!has(&classes, "topic-card--list"));
}

#[test]
fn test_category_in_both_lists_with_list_priority() {
    let yaml = "\
list_view_categories: \"9\"
grid_view_categories: \"9\"
category_priority: list
";
    assert_style(&render(yaml, 9, Viewport::Desktop), "list");
}

#[test]
fn test_empty_lists_fall_back_to_list() {
    let yaml = "\
list_view_categories: \"\"
grid_view_categories: \"\"
card_style_mobile: grid
";
    for category in [1, 2, 3] {
        assert_style(&render(yaml, category, Viewport::Desktop), "list");
    }
}

// ============================================================================
// Size constraints
// ============================================================================

#[test]
fn test_max_height_on_list_cards_only() {
    let yaml = "\
list_view_categories: \"5\"
grid_view_categories: \"6\"
card_style_mobile: list
set_card_max_height: true
card_max_height: 275
";
    let list = render(yaml, 5, Viewport::Desktop);
    assert!(has(&list, "has-max-height"));
    assert_eq!(list.style_attribute(), "--topic-card-max-height: 275px");

    let grid = render(yaml, 6, Viewport::Desktop);
    assert!(!has(&grid, "has-max-height"));
}

#[test]
fn test_max_width_on_grid_cards_only() {
    let yaml = "\
list_view_categories: \"5\"
grid_view_categories: \"6\"
card_style_mobile: grid
set_grid_card_max_width: true
grid_card_max_width: 360
";
    assert!(has(&render(yaml, 6, Viewport::Desktop), "has-max-width"));
    assert!(!has(&render(yaml, 5, Viewport::Desktop), "has-max-width"));
}

#[test]
fn test_grid_height_on_desktop_only() {
    let yaml = "\
list_view_categories: \"\"
grid_view_categories: \"6\"
card_style_mobile: grid
set_card_grid_height: true
card_grid_height: 420
";
    assert!(has(&render(yaml, 6, Viewport::Desktop), "has-grid-height"));
    assert!(!has(&render(yaml, 6, Viewport::Mobile), "has-grid-height"));
}

#[test]
fn test_independent_max_dimensions() {
    let yaml = "\
list_view_categories: \"5\"
grid_view_categories: \"\"
card_style_mobile: grid
set_card_max_height: true
card_max_height: 275
set_grid_card_max_width: true
grid_card_max_width: 360
";
    let desktop = render(yaml, 5, Viewport::Desktop);
    assert_style(&desktop, "list");
    assert!(has(&desktop, "has-max-height"));
    assert!(!has(&desktop, "has-max-width"));

    let mobile = render(yaml, 5, Viewport::Mobile);
    assert_style(&mobile, "grid");
    assert!(has(&mobile, "has-max-width"));
    assert!(!has(&mobile, "has-max-height"));
}

#[test]
fn test_modifier_order() {
    let classes = render(&all_constraints_yaml(), GRID_CATEGORY, Viewport::Desktop);
    assert_eq!(
        classes.card_attribute(),
        "topic-card topic-card--grid has-max-width has-grid-height"
    );
}
