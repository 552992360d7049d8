//! Course search bar
//!
//! A single-line input with live suggestions drawn from the catalog. The
//! caller supplies a callback that fires on submit or suggestion selection.

mod filter;
mod search_bar_events;
mod search_bar_render;
mod search_bar_state;

pub use filter::{MAX_SUGGESTIONS, filter_courses};
pub use search_bar_events::{handle_click, handle_key};
pub use search_bar_render::{SEARCH_BAR_HEIGHT, render_bar, render_suggestions};
pub use search_bar_state::{DraftState, SearchBar, SearchCallback};
