//! Config file discovery and loading.
//!
//! The config file is optional; when none of the candidate locations holds
//! one, [`load_default_config`] returns [`Config::default`]. The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/iterm-splitter/config.toml`
//! 2. `~/.config/iterm-splitter/config.toml`
//! 3. Platform default (e.g., `~/Library/Application Support` on macOS)

use crate::config::Config;
use crate::error::{Result, SplitterError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "iterm-splitter";
const CONFIG_FILE: &str = "config.toml";

/// List the config file locations in order of preference.
///
/// # Errors
///
/// Returns [`SplitterError::NoConfigDir`] if neither `XDG_CONFIG_HOME` nor a
/// home or platform config directory can be determined.
pub fn candidate_paths() -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            paths.push(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
        }
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(APP_DIR).join(CONFIG_FILE);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(SplitterError::NoConfigDir);
    }
    Ok(paths)
}

/// Find the first existing config file, if any.
pub fn find_config_path() -> Result<Option<PathBuf>> {
    Ok(candidate_paths()?.into_iter().find(|p| p.is_file()))
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`SplitterError::Io`] if reading fails
/// - [`SplitterError::ConfigParse`] if TOML parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config = Config::from_str(&contents)?;
    Ok(config)
}

/// Load config from the first existing candidate path.
///
/// Returns the default config when no file exists. A missing config
/// directory is not an error here: the tool works without one.
pub fn load_default_config() -> Result<Config> {
    let path = match find_config_path() {
        Ok(Some(path)) => path,
        Ok(None) | Err(SplitterError::NoConfigDir) => {
            tracing::debug!("no config file found, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };

    tracing::debug!(path = %path.display(), "loading config");
    load_config(&path)
}
