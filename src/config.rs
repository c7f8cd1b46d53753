//! Configuration loading
//!
//! Reads `~/.config/tickr/config.toml` (or an explicit path). A missing file
//! yields defaults silently; a broken one yields defaults plus a warning the UI
//! can show.

mod types;

use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_ENDPOINT, DEFAULT_MAX_VISIBLE_SUGGESTIONS, DEFAULT_TIMEOUT_MS, SearchConfig,
    UiConfig,
};

use crate::error::TickrError;

const CONFIG_DIR: &str = "tickr";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning if the file could not be used
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when `path` is `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config ignored: {}", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, TickrError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents).map_err(|e| TickrError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}
