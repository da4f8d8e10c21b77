//! tmux backend.
//!
//! Drives the tmux server the current shell is attached to through the
//! `tmux` CLI. A "tab" is a tmux window and a session handle is a pane id
//! such as `%12`, which stays valid regardless of `pane-base-index`.

use crate::config::Orientation;
use crate::error::{Result, SplitterError};
use crate::terminal::Terminal;
use std::borrow::Cow;
use tokio::process::Command;

const PANE_ID_FORMAT: &str = "#{pane_id}";

/// Check if we're running inside a tmux session.
///
/// Checks for the `TMUX` environment variable, which tmux sets when active.
pub fn in_tmux() -> bool {
    std::env::var("TMUX").is_ok()
}

/// A connection to the enclosing tmux server.
#[derive(Debug)]
pub struct Tmux {
    _private: (),
}

impl Tmux {
    /// Verify that tmux is reachable.
    ///
    /// # Errors
    ///
    /// - [`SplitterError::NotInTmux`] if not running inside tmux
    /// - [`SplitterError::Connection`] if the server does not answer
    pub async fn connect() -> Result<Self> {
        if !in_tmux() {
            return Err(SplitterError::NotInTmux);
        }

        let session = run(&["display-message", "-p", "#{session_name}"])
            .await
            .map_err(|e| SplitterError::Connection {
                backend: "tmux",
                reason: e.to_string(),
            })?;
        tracing::debug!(session = %session, "connected to tmux");

        Ok(Self { _private: () })
    }
}

impl Terminal for Tmux {
    type Session = String;

    fn name(&self) -> &'static str {
        "tmux"
    }

    async fn open_tab(&mut self) -> Result<String> {
        let pane = run(&["new-window", "-P", "-F", PANE_ID_FORMAT]).await?;
        tracing::debug!(pane = %pane, "created tmux window");
        Ok(pane)
    }

    async fn split(&mut self, session: &String, orientation: Orientation) -> Result<String> {
        let args = split_args(session, orientation);
        let pane = run(&args).await?;
        tracing::debug!(source = %session, pane = %pane, "split tmux pane");
        Ok(pane)
    }

    async fn send_text(&mut self, session: &String, text: &str) -> Result<()> {
        let (body, submit) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };

        if !body.is_empty() {
            let escaped = escape_literal(body);
            run(&send_literal_args(session, &escaped)).await?;
        }
        if submit {
            run(&["send-keys", "-t", session.as_str(), "Enter"]).await?;
        }
        Ok(())
    }
}

/// Arguments for splitting `pane` and printing the new pane's id.
fn split_args(pane: &str, orientation: Orientation) -> [&str; 7] {
    [
        "split-window",
        "-t",
        pane,
        orientation.to_tmux_flag(),
        "-P",
        "-F",
        PANE_ID_FORMAT,
    ]
}

/// Arguments for typing `body` into `pane` as literal keys.
///
/// `--` ends option parsing so a body starting with `-` is not read as a flag.
fn send_literal_args<'a>(pane: &'a str, body: &'a str) -> [&'a str; 6] {
    ["send-keys", "-t", pane, "-l", "--", body]
}

/// Protect a trailing `;` from tmux's command parser.
///
/// tmux treats an argument ending in `;` as a command separator and strips
/// one backslash from a trailing `\;`, so one extra backslash restores the
/// original text in both cases.
fn escape_literal(body: &str) -> Cow<'_, str> {
    match body.strip_suffix(';') {
        Some(head) => Cow::Owned(format!("{}\\;", head)),
        None => Cow::Borrowed(body),
    }
}

/// Run one tmux command and return its trimmed stdout.
async fn run(args: &[&str]) -> Result<String> {
    let output = Command::new("tmux")
        .args(args)
        .output()
        .await
        .map_err(|e| SplitterError::Automation(format!("failed to run tmux: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SplitterError::Automation(format!(
            "tmux {} failed: {}",
            args.first().copied().unwrap_or_default(),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
