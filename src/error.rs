use thiserror::Error;

/// Errors surfaced by the coursefind binary
#[derive(Debug, Error)]
pub enum CourseFindError {
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Logger setup failed: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
