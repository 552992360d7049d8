//! Tests for mouse click handling

use super::handle_click;
use crate::app::App;
use crate::catalog::CatalogState;
use crate::layout::Region;
use crate::search_bar::DraftState;
use crate::test_utils::test_helpers::sample_catalog;

fn setup_app() -> App {
    App::new(CatalogState::preloaded(sample_catalog()), None)
}

#[test]
fn test_click_suggestion_row_produces_outcome() {
    let mut app = setup_app();
    app.search_bar.input_changed("CS");

    handle_click(&mut app, Some(Region::SuggestionRow(1)));
    app.drain_outcomes();

    assert_eq!(app.last_outcome.as_ref().unwrap().query, "CS201");
}

#[test]
fn test_click_toggle_icon_clears_draft() {
    let mut app = setup_app();
    app.search_bar.input_changed("CS");

    handle_click(&mut app, Some(Region::ToggleIcon));
    app.drain_outcomes();

    assert_eq!(app.search_bar.draft(), &DraftState::Idle);
    assert!(app.last_outcome.is_none());
}

#[test]
fn test_click_submit_button() {
    let mut app = setup_app();
    app.search_bar.input_changed("CS1");

    handle_click(&mut app, Some(Region::SubmitButton));
    app.drain_outcomes();

    assert_eq!(app.last_outcome.as_ref().unwrap().query, "CS1");
}

#[test]
fn test_click_results_pane_keeps_panel_open() {
    let mut app = setup_app();
    app.search_bar.input_changed("CS");

    handle_click(&mut app, Some(Region::ResultsPane));

    assert!(app.search_bar.draft().is_editing());
}

#[test]
fn test_click_input_does_nothing() {
    let mut app = setup_app();
    app.search_bar.input_changed("CS");

    handle_click(&mut app, Some(Region::SearchInput));
    handle_click(&mut app, None);

    assert!(app.search_bar.draft().is_editing());
    assert!(app.last_outcome.is_none());
}
