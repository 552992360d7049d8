use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::layout::region_at;
use crate::search_bar;

/// Route a terminal event to the search bar
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        // Only process key press events (avoid duplicates)
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        _ => {}
    }

    app.drain_outcomes();
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    let consumed = search_bar::handle_key(&mut app.search_bar, key);
    if !consumed && key.code == KeyCode::Esc {
        app.quit();
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        let region = region_at(&app.layout_regions, mouse.column, mouse.row);
        mouse_click::handle_click(app, region);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
