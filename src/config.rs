//! Configuration loading
//!
//! Reads `~/.config/coursefind/config.toml`. A missing file yields the
//! defaults silently; an unreadable or invalid file yields the defaults plus a
//! warning for the status line.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{CatalogConfig, Config};

use crate::error::CourseFindError;

const CONFIG_DIR: &str = "coursefind";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to show the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default configuration: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, CourseFindError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| CourseFindError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
