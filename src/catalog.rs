//! Course catalog
//!
//! The catalog is fetched exactly once per search bar mount on a background
//! thread and handed back to the UI thread over a channel. Every failure mode
//! collapses to an empty catalog on the UI side.

mod catalog_state;
mod client;
mod course;

use thiserror::Error;

pub use catalog_state::{CatalogState, CatalogStatus};
pub use client::{COURSES_PATH, CatalogClient, endpoint_url, spawn_fetch};
pub use course::{Course, CourseId, parse_catalog};

/// Result delivered by the fetch worker
pub type CatalogResponse = Result<Vec<Course>, CatalogError>;

/// Errors that can occur while fetching the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Catalog request failed with status {0}")]
    Status(u16),

    /// Body was not an array of course records
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Runtime for the fetch could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The search bar was disposed before the fetch finished
    #[error("Catalog fetch cancelled")]
    Cancelled,
}
