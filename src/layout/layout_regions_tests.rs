//! Tests for LayoutRegions

use ratatui::layout::Rect;

use super::*;

#[test]
fn test_new_regions_are_empty() {
    let regions = LayoutRegions::new();

    assert!(regions.search_input.is_none());
    assert!(regions.toggle_icon.is_none());
    assert!(regions.submit_button.is_none());
    assert!(regions.suggestion_rows.is_empty());
    assert!(regions.results_pane.is_none());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = LayoutRegions::new();
    regions.search_input = Some(Rect::new(0, 0, 40, 3));
    regions.toggle_icon = Some(Rect::new(37, 1, 1, 1));
    regions.submit_button = Some(Rect::new(40, 0, 12, 3));
    regions.suggestion_rows.push(Rect::new(1, 4, 20, 1));
    regions.results_pane = Some(Rect::new(0, 3, 52, 10));

    regions.clear();

    assert_eq!(regions, LayoutRegions::default());
}
