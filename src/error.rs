//! Error types for iterm-splitter.
//!
//! All errors are represented by [`SplitterError`], which covers input
//! problems, config issues, and failures talking to the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in iterm-splitter.
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Command file does not exist.
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    /// Command file exists but holds no non-blank lines.
    #[error("No commands found in {}", .0.display())]
    NoCommands(PathBuf),

    /// An empty command list was handed to the planner.
    #[error("No commands to run")]
    EmptyCommands,

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing of the config file failed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// The terminal application could not be reached.
    #[error("Could not connect to {backend}: {reason}")]
    Connection {
        /// Backend name, e.g. `iTerm2`.
        backend: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// An automation call (new tab, split, send) failed after connecting.
    #[error("Automation error: {0}")]
    Automation(String),

    /// The tmux backend was selected outside of a tmux session.
    #[error("Not running inside tmux")]
    NotInTmux,
}

/// Convenient Result type alias for iterm-splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_name_the_file() {
        let err = SplitterError::NoCommands(PathBuf::from("/tmp/its.txt"));
        assert_eq!(err.to_string(), "No commands found in /tmp/its.txt");

        let err = SplitterError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "missing.txt not found");
    }

    #[test]
    fn test_connection_error_message() {
        let err = SplitterError::Connection {
            backend: "iTerm2",
            reason: "not running".into(),
        };
        assert_eq!(err.to_string(), "Could not connect to iTerm2: not running");
    }
}
