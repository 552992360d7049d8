//! File logging
//!
//! The terminal belongs to the UI, so log records go to
//! `<data dir>/coursefind/coursefind.log`. Level comes from `RUST_LOG`
//! (default `info`).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::CourseFindError;

const LOG_DIR: &str = "coursefind";
const LOG_FILE: &str = "coursefind.log";

pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}

/// Install the global logger writing to `log_path()`
pub fn init() -> Result<PathBuf, CourseFindError> {
    let path = log_path();
    init_at(&path)?;
    Ok(path)
}

pub fn init_at(path: &Path) -> Result<(), CourseFindError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| CourseFindError::Logger(e.to_string()))
}
