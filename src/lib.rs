//! coursefind: terminal course search bar with live autocomplete
//!
//! The catalog is fetched once from `GET /api/courses?`, filtered in memory
//! on every keystroke, and the caller is notified on submit or suggestion
//! selection.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod search_bar;
pub mod widgets;

#[cfg(test)]
mod test_utils;
