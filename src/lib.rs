//! # iterm-splitter
//!
//! Opens a new terminal tab and runs each of a list of shell commands in its
//! own split pane.
//!
//! The layout is a fixed grid. The first `max_v_pane` commands get panes
//! stacked under the initial pane (the *primary* panes). Every further
//! command splits a primary pane side by side, cycling through them in order.
//!
//! ## Quick Example
//!
//! ```text
//! # its.txt
//! npm run dev
//! cargo watch -x run
//! tail -f log/development.log
//! ```
//!
//! ```bash
//! iterm-splitter               # reads ./its.txt
//! iterm-splitter --max-v-pane 2 htop top "df -h"
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`cli`]: Command-line argument parsing with clap
//! - [`config`]: Optional TOML settings and shared enums
//! - [`loader`]: Config file discovery and loading
//! - [`input`]: Command list resolution from arguments or a file
//! - [`init`]: Interactive creation of the command file
//! - [`plan`]: Pure pane layout planning
//! - [`terminal`]: The async automation trait backends implement
//! - [`iterm2`]: iTerm2 backend over AppleScript
//! - [`tmux`]: tmux backend over the tmux CLI
//! - [`dry_run`]: Recording backend for `--dry-run`
//! - [`driver`]: Sequential plan execution
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod driver;
pub mod dry_run;
pub mod error;
pub mod init;
pub mod input;
pub mod iterm2;
pub mod loader;
pub mod plan;
pub mod terminal;
pub mod tmux;

pub use config::{Backend, Config, Orientation, Settings};
pub use error::{Result, SplitterError};
pub use plan::{Plan, PlanEntry};
pub use terminal::Terminal;
