use ratatui::layout::Rect;

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    /// Search glyph when idle, clear glyph while editing
    ToggleIcon,
    SubmitButton,
    /// Row of the suggestion panel, by visible index
    SuggestionRow(usize),
    ResultsPane,
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub toggle_icon: Option<Rect>,
    pub submit_button: Option<Rect>,
    pub suggestion_rows: Vec<Rect>,
    pub results_pane: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything before a fresh render
    pub fn clear(&mut self) {
        self.search_input = None;
        self.toggle_icon = None;
        self.submit_button = None;
        self.suggestion_rows.clear();
        self.results_pane = None;
    }
}
