//! Keyboard and mouse handling for the search bar

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::SearchBar;
use crate::layout::Region;

/// Handle a key press while the search bar has focus
///
/// Returns false when the key was not consumed (Esc with no draft), so the
/// caller can treat it as a quit request.
pub fn handle_key(bar: &mut SearchBar, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            match bar.highlighted() {
                Some(index) => {
                    bar.select_at(index);
                }
                None => {
                    bar.submit();
                }
            }
            true
        }

        KeyCode::Tab => {
            if bar.draft().is_editing() {
                bar.select_at(bar.highlighted().unwrap_or(0));
            }
            true
        }

        KeyCode::Down => {
            bar.highlight_next();
            true
        }
        KeyCode::Up => {
            bar.highlight_previous();
            true
        }

        KeyCode::Esc => {
            if bar.draft().is_editing() {
                bar.clear();
                true
            } else {
                false
            }
        }

        // Newline shortcuts would split the single-line input
        KeyCode::Char('m') | KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            true
        }

        _ => {
            let input = Input::from(key);
            if bar.textarea_mut().input(input) {
                let text = bar.current_text().to_string();
                bar.input_changed(&text);
            }
            true
        }
    }
}

/// Handle a left click on a search bar region
pub fn handle_click(bar: &mut SearchBar, region: Option<Region>) -> bool {
    match region {
        Some(Region::SuggestionRow(index)) => bar.select_at(index),
        Some(Region::ToggleIcon) => {
            // Search glyph when idle does nothing
            if bar.draft().is_editing() {
                bar.clear();
                true
            } else {
                false
            }
        }
        Some(Region::SubmitButton) => bar.submit(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "search_bar_events_tests.rs"]
mod search_bar_events_tests;
