use std::sync::mpsc::{self, Receiver};

use chrono::{DateTime, Local};

use crate::catalog::{CatalogState, Course};
use crate::layout::LayoutRegions;
use crate::search_bar::{SearchBar, SearchCallback};

/// What the search bar handed to its callback
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub matches: Vec<Course>,
    pub at: DateTime<Local>,
}

impl SearchOutcome {
    pub fn new(query: &str, matches: &[Course]) -> Self {
        Self {
            query: query.to_string(),
            matches: matches.to_vec(),
            at: Local::now(),
        }
    }
}

/// Application state
pub struct App {
    pub search_bar: SearchBar,
    pub last_outcome: Option<SearchOutcome>,
    /// Number of callback invocations this session
    pub search_count: usize,
    pub layout_regions: LayoutRegions,
    pub config_warning: Option<String>,
    outcome_rx: Receiver<SearchOutcome>,
    should_quit: bool,
}

impl App {
    /// Mount the search bar over `catalog`
    pub fn new(catalog: CatalogState, config_warning: Option<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let on_search: SearchCallback = Box::new(move |query: &str, matches: &[Course]| {
            let _ = outcome_tx.send(SearchOutcome::new(query, matches));
        });

        Self {
            search_bar: SearchBar::new(catalog, on_search),
            last_outcome: None,
            search_count: 0,
            layout_regions: LayoutRegions::new(),
            config_warning,
            outcome_rx,
            should_quit: false,
        }
    }

    /// Poll the catalog fetch and collect callback invocations
    pub fn tick(&mut self) {
        self.search_bar.poll();
        self.drain_outcomes();
    }

    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.search_count += 1;
            self.last_outcome = Some(outcome);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.search_bar.dispose();
    }

    /// Text printed to stdout on exit: the last query, then one matching
    /// course code per line
    pub fn final_output(&self) -> Option<String> {
        let outcome = self.last_outcome.as_ref()?;
        let mut lines = vec![outcome.query.clone()];
        lines.extend(outcome.matches.iter().map(|c| c.course_code.clone()));
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
