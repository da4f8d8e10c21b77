//! Configuration types for iterm-splitter.
//!
//! The config file is optional. Every key has a built-in default, and
//! command-line flags override whatever the file says.
//!
//! # Config Format
//!
//! ```toml
//! max_v_pane = 3
//! file = "dev-commands.txt"
//! backend = "tmux"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default cap on primary panes.
pub const DEFAULT_MAX_V_PANE: usize = 4;

/// Default command-list file name, resolved against the current directory.
pub const DEFAULT_COMMANDS_FILE: &str = "its.txt";

/// Direction of a pane split.
///
/// Named after the divider line, matching iTerm2's terminology:
/// - `Horizontal`: the new pane appears below the source pane
/// - `Vertical`: the new pane appears beside the source pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// New pane stacked below the source.
    Horizontal,
    /// New pane side by side with the source.
    Vertical,
}

impl Orientation {
    /// Convert to the `split-window` flag tmux uses for the same split.
    ///
    /// tmux names splits after the pane arrangement, not the divider, so the
    /// flags are swapped relative to iTerm2.
    pub fn to_tmux_flag(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "-v",
            Orientation::Vertical => "-h",
        }
    }

    /// Convert to the AppleScript `split ... with default profile` verb.
    pub fn to_applescript(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontally",
            Orientation::Vertical => "vertically",
        }
    }
}

/// Terminal application to automate.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// iTerm2 on macOS, scripted through `osascript`.
    #[default]
    #[value(name = "iterm2")]
    Iterm2,
    /// The tmux server the current shell is attached to.
    Tmux,
}

impl Backend {
    /// Human-readable application name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::Iterm2 => "iTerm2",
            Backend::Tmux => "tmux",
        }
    }
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/iterm-splitter/config.toml` (or XDG equivalent).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Cap on primary panes. Values below 1 are clamped to 1.
    #[serde(default)]
    pub max_v_pane: Option<i64>,
    /// Command-list file used when no commands are given on the command line.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Terminal application to drive.
    #[serde(default)]
    pub backend: Option<Backend>,
}

impl Config {
    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed or contains
    /// unknown keys.
    pub fn from_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Primary pane cap, before clamping.
    pub max_v_pane: i64,
    /// Command-list file.
    pub file: PathBuf,
    /// Terminal application to drive.
    pub backend: Backend,
}

impl Settings {
    /// Resolve settings with precedence: CLI flag > config file > default.
    ///
    /// A relative `file` from either source is resolved against `cwd`.
    pub fn resolve(
        max_v_pane: Option<i64>,
        file: Option<PathBuf>,
        backend: Option<Backend>,
        config: &Config,
        cwd: &Path,
    ) -> Self {
        let file = file
            .or_else(|| config.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMMANDS_FILE));

        Settings {
            max_v_pane: max_v_pane
                .or(config.max_v_pane)
                .unwrap_or(DEFAULT_MAX_V_PANE as i64),
            file: cwd.join(file),
            backend: backend.or(config.backend).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            max_v_pane = 2
            file = "cmds.txt"
            backend = "tmux"
            "#,
        )
        .unwrap();
        assert_eq!(config.max_v_pane, Some(2));
        assert_eq!(config.file, Some(PathBuf::from("cmds.txt")));
        assert_eq!(config.backend, Some(Backend::Tmux));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_str("layout = \"tiled\"").is_err());
    }

    #[test]
    fn test_orientation_mappings() {
        assert_eq!(Orientation::Horizontal.to_tmux_flag(), "-v");
        assert_eq!(Orientation::Vertical.to_tmux_flag(), "-h");
        assert_eq!(Orientation::Vertical.to_applescript(), "vertically");
    }

    #[test]
    fn test_settings_precedence() {
        let config = Config {
            max_v_pane: Some(2),
            file: Some(PathBuf::from("cfg.txt")),
            backend: Some(Backend::Tmux),
        };
        let cwd = Path::new("/work");

        let settings = Settings::resolve(None, None, None, &config, cwd);
        assert_eq!(settings.max_v_pane, 2);
        assert_eq!(settings.file, PathBuf::from("/work/cfg.txt"));
        assert_eq!(settings.backend, Backend::Tmux);

        let settings = Settings::resolve(
            Some(6),
            Some(PathBuf::from("/abs/cmds.txt")),
            Some(Backend::Iterm2),
            &config,
            cwd,
        );
        assert_eq!(settings.max_v_pane, 6);
        assert_eq!(settings.file, PathBuf::from("/abs/cmds.txt"));
        assert_eq!(settings.backend, Backend::Iterm2);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(None, None, None, &Config::default(), Path::new("/w"));
        assert_eq!(settings.max_v_pane, 4);
        assert_eq!(settings.file, PathBuf::from("/w/its.txt"));
        assert_eq!(settings.backend, Backend::Iterm2);
    }
}
