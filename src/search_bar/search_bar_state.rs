use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::filter::filter_courses;
use crate::catalog::{CatalogState, CatalogStatus, Course};

/// Invoked with `(query, matches)` on submit or suggestion selection
pub type SearchCallback = Box<dyn FnMut(&str, &[Course])>;

/// Live edit session of the input
///
/// `Editing` never holds an empty string; emptying the input returns to
/// `Idle`, which also hides the suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Idle,
    Editing(String),
}

impl DraftState {
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            DraftState::Idle
        } else {
            DraftState::Editing(text.to_string())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DraftState::Idle => "",
            DraftState::Editing(text) => text,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, DraftState::Editing(_))
    }
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Search by course code");
    textarea
}

/// State of the course search bar
pub struct SearchBar {
    textarea: TextArea<'static>,
    /// Last value typed, submitted or selected; the input itself shows the draft
    committed_value: String,
    draft: DraftState,
    catalog: CatalogState,
    /// Recomputed on every draft change, kept across submit
    suggestions: Vec<Course>,
    highlighted: Option<usize>,
    /// Suggestion rows that fit on screen at the last render; `None` until drawn
    row_limit: Option<usize>,
    on_search: SearchCallback,
}

impl SearchBar {
    pub fn new(catalog: CatalogState, on_search: SearchCallback) -> Self {
        Self {
            textarea: create_search_textarea(),
            committed_value: String::new(),
            draft: DraftState::Idle,
            catalog,
            suggestions: Vec::new(),
            highlighted: None,
            row_limit: None,
            on_search,
        }
    }

    /// Pick up the catalog fetch result, if any
    pub fn poll(&mut self) -> bool {
        self.catalog.poll()
    }

    /// Apply new input text
    ///
    /// Filters against whatever catalog is loaded right now; a catalog that
    /// arrives later is only seen on the next change.
    pub fn input_changed(&mut self, new_text: &str) {
        if self.current_text() != new_text {
            replace_text(&mut self.textarea, new_text);
        }

        self.draft = DraftState::from_text(new_text);
        self.committed_value = new_text.to_string();
        self.suggestions = filter_courses(self.catalog.courses(), new_text);
        self.highlighted = None;
    }

    /// Commit the typed value
    ///
    /// The callback receives the suggestions computed from the draft before it
    /// was cleared. An empty input is not submitted.
    pub fn submit(&mut self) -> bool {
        if !self.draft.is_editing() {
            log::debug!("Ignoring submit of empty search");
            return false;
        }

        self.end_edit();
        log::info!(
            "Search submitted: {:?} ({} matches)",
            self.committed_value,
            self.suggestions.len()
        );
        (self.on_search)(&self.committed_value, &self.suggestions);
        true
    }

    /// Commit a course code picked from the suggestions
    pub fn select(&mut self, code: &str) {
        self.end_edit();
        self.committed_value = code.to_string();

        log::info!("Suggestion selected: {:?}", code);
        (self.on_search)(&self.committed_value, &self.suggestions);
    }

    /// Select the visible suggestion at `index`
    pub fn select_at(&mut self, index: usize) -> bool {
        let Some(code) = self
            .selectable_suggestions()
            .get(index)
            .map(|course| course.course_code.clone())
        else {
            return false;
        };

        self.select(&code);
        true
    }

    /// Collapse the suggestion panel without notifying the caller
    pub fn clear(&mut self) {
        self.end_edit();
    }

    pub fn highlight_next(&mut self) {
        let count = self.selectable_suggestions().len();
        if count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn highlight_previous(&mut self) {
        let count = self.selectable_suggestions().len();
        if count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Suggestions to render; empty unless the draft is being edited
    pub fn visible_suggestions(&self) -> &[Course] {
        if self.draft.is_editing() {
            &self.suggestions
        } else {
            &[]
        }
    }

    /// Visible suggestions that were actually drawn on screen
    pub fn selectable_suggestions(&self) -> &[Course] {
        let visible = self.visible_suggestions();
        match self.row_limit {
            Some(limit) => &visible[..visible.len().min(limit)],
            None => visible,
        }
    }

    /// Record how many suggestion rows the last render could show
    ///
    /// A highlight on a row that no longer fits is dropped.
    pub fn set_row_limit(&mut self, limit: usize) {
        self.row_limit = Some(limit);
        if self.highlighted.is_some_and(|i| i >= limit) {
            self.highlighted = None;
        }
    }

    pub fn suggestions(&self) -> &[Course] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn committed_value(&self) -> &str {
        &self.committed_value
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// One-line catalog summary for the status bar
    pub fn catalog_summary(&self) -> String {
        match self.catalog.status() {
            CatalogStatus::Loading => "loading catalog…".to_string(),
            CatalogStatus::Ready => format!("{} courses", self.catalog.courses().len()),
            CatalogStatus::Failed(_) => "catalog unavailable".to_string(),
        }
    }

    /// Stop accepting the catalog fetch result
    pub fn dispose(&mut self) {
        self.catalog.dispose();
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Text currently held by the input widget
    pub fn current_text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    fn end_edit(&mut self) {
        self.draft = DraftState::Idle;
        self.highlighted = None;
        replace_text(&mut self.textarea, "");
    }
}

fn replace_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea.delete_line_by_head();
    textarea.insert_str(text);
}

#[cfg(test)]
#[path = "search_bar_state_tests.rs"]
mod search_bar_state_tests;
