//! Mouse click handling
//!
//! Clicks on the search bar's glyph, button and suggestion rows are forwarded
//! to it. The input box and results pane have no click behavior.

use super::app_state::App;
use crate::layout::Region;
use crate::search_bar;

pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::ToggleIcon | Region::SubmitButton | Region::SuggestionRow(_)) => {
            search_bar::handle_click(&mut app.search_bar, region);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
