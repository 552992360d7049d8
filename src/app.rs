mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_events::handle_event;
pub use app_render::render;
pub use app_state::{App, SearchOutcome};
