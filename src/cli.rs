//! Command-line interface for iterm-splitter.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::config::Backend;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line arguments for iterm-splitter.
///
/// # Examples
///
/// ```bash
/// # Three commands, three stacked panes
/// iterm-splitter "ls -la" "htop" "df -h"
///
/// # Cap at 3 primary panes; extra commands split beside them
/// iterm-splitter --max-v-pane 3 top htop vim "ps aux" "tail -f /var/log/system.log"
///
/// # Read commands from a file
/// iterm-splitter --file my-commands.txt
///
/// # Create its.txt interactively
/// iterm-splitter --init
/// ```
#[derive(Parser, Debug)]
#[command(name = "iterm-splitter")]
#[command(version, disable_version_flag = true)]
#[command(about = "iTerm Splitter - Run multiple commands in split panes")]
#[command(long_about = "Opens a new terminal tab and runs each command in its own pane.\n\n\
    The first commands, up to --max-v-pane, get panes stacked under each other.\n\
    Further commands split those panes side by side, cycling through them.\n\
    Commands come from the arguments, or from its.txt (or --file) when none are given.")]
pub struct Cli {
    /// Commands to run in split panes.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Maximum number of stacked panes before new commands split side by side.
    ///
    /// Defaults to 4, or `max_v_pane` from the config file. Values below 1 are treated as 1.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_v_pane: Option<i64>,

    /// Interactively create the commands file in the current directory.
    #[arg(long)]
    pub init: bool,

    /// Path to commands file (default: its.txt in current directory).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Terminal application to drive.
    #[arg(long, value_enum, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Print the pane operations instead of performing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Show version number and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commands_and_flags() {
        let cli = Cli::try_parse_from([
            "iterm-splitter",
            "--max-v-pane",
            "2",
            "--backend",
            "tmux",
            "htop",
            "ls -la",
        ])
        .unwrap();
        assert_eq!(cli.commands, vec!["htop", "ls -la"]);
        assert_eq!(cli.max_v_pane, Some(2));
        assert_eq!(cli.backend, Some(Backend::Tmux));
        assert!(!cli.init);
    }

    #[test]
    fn test_negative_max_v_pane_parses() {
        let cli = Cli::try_parse_from(["iterm-splitter", "--max-v-pane", "-3", "a"]).unwrap();
        assert_eq!(cli.max_v_pane, Some(-3));
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["iterm-splitter", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
