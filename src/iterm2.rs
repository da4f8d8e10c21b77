//! iTerm2 backend.
//!
//! Talks to iTerm2 through its AppleScript dictionary, one `osascript`
//! invocation per operation. Session handles are iTerm2's unique session
//! ids, resolved back to a session object by walking windows and tabs.
//!
//! Arguments are passed through `argv` rather than spliced into the script
//! source, so commands never need AppleScript escaping.

use crate::config::Orientation;
use crate::error::{Result, SplitterError};
use crate::terminal::Terminal;
use tokio::process::Command;

const BACKEND: &str = "iTerm2";

const PROBE_SCRIPT: &str = r#"
on run argv
    if application id "com.googlecode.iterm2" is running then
        return "running"
    end if
    return "stopped"
end run
"#;

const OPEN_TAB_SCRIPT: &str = r#"
on run argv
    tell application id "com.googlecode.iterm2"
        set w to current window
        if w is missing value then
            set w to (create window with default profile)
        else
            tell w to create tab with default profile
        end if
        return id of current session of w
    end tell
end run
"#;

const FIND_SESSION_HANDLER: &str = r#"
on findSession(sessionId)
    tell application id "com.googlecode.iterm2"
        repeat with w in windows
            repeat with t in tabs of w
                repeat with s in sessions of t
                    if (id of s as text) is sessionId then return s
                end repeat
            end repeat
        end repeat
    end tell
    error "no session with id " & sessionId
end findSession
"#;

const SPLIT_SCRIPT: &str = r#"
on run argv
    set s to my findSession(item 1 of argv)
    tell application id "com.googlecode.iterm2"
        tell s
            if item 2 of argv is "vertically" then
                set n to (split vertically with default profile)
            else
                set n to (split horizontally with default profile)
            end if
        end tell
        return id of n
    end tell
end run
"#;

const SEND_SCRIPT: &str = r#"
on run argv
    set s to my findSession(item 1 of argv)
    tell application id "com.googlecode.iterm2"
        if item 3 of argv is "submit" then
            tell s to write text (item 2 of argv)
        else
            tell s to write text (item 2 of argv) without newline
        end if
    end tell
end run
"#;

/// A connection to a running iTerm2 instance.
#[derive(Debug)]
pub struct ITerm2 {
    _private: (),
}

impl ITerm2 {
    /// Verify that `osascript` is available and iTerm2 is running.
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::Connection`] when either check fails.
    pub async fn connect() -> Result<Self> {
        let state = osascript(PROBE_SCRIPT, &[]).await.map_err(connection_error)?;
        if state != "running" {
            return Err(SplitterError::Connection {
                backend: BACKEND,
                reason: "iTerm2 is not running".into(),
            });
        }

        tracing::debug!("connected to iTerm2");
        Ok(Self { _private: () })
    }
}

impl Terminal for ITerm2 {
    type Session = String;

    fn name(&self) -> &'static str {
        BACKEND
    }

    async fn open_tab(&mut self) -> Result<String> {
        let session = osascript(OPEN_TAB_SCRIPT, &[]).await?;
        tracing::debug!(session = %session, "created iTerm2 tab");
        Ok(session)
    }

    async fn split(&mut self, session: &String, orientation: Orientation) -> Result<String> {
        let script = with_finder(SPLIT_SCRIPT);
        let created = osascript(&script, &[session.as_str(), orientation.to_applescript()]).await?;
        tracing::debug!(source = %session, session = %created, "split iTerm2 session");
        Ok(created)
    }

    async fn send_text(&mut self, session: &String, text: &str) -> Result<()> {
        let (body, mode) = match text.strip_suffix('\n') {
            Some(body) => (body, "submit"),
            None => (text, "raw"),
        };
        let script = with_finder(SEND_SCRIPT);
        osascript(&script, &[session.as_str(), body, mode]).await?;
        Ok(())
    }
}

fn with_finder(script: &str) -> String {
    format!("{}{}", FIND_SESSION_HANDLER, script)
}

fn connection_error(err: SplitterError) -> SplitterError {
    match err {
        SplitterError::Automation(reason) => SplitterError::Connection {
            backend: BACKEND,
            reason,
        },
        other => other,
    }
}

/// Run an AppleScript with `args` as its `argv`, returning trimmed stdout.
async fn osascript(script: &str, args: &[&str]) -> Result<String> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .args(args)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SplitterError::Connection {
                backend: BACKEND,
                reason: "osascript not found (iTerm2 automation requires macOS)".into(),
            },
            _ => SplitterError::Automation(format!("failed to run osascript: {}", e)),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SplitterError::Automation(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_take_arguments_from_argv() {
        for script in [SPLIT_SCRIPT, SEND_SCRIPT] {
            let full = with_finder(script);
            assert!(full.contains("on findSession(sessionId)"));
            assert!(full.contains("item 1 of argv"));
        }
    }

    #[test]
    fn test_automation_failure_during_connect_becomes_connection_error() {
        let err = connection_error(SplitterError::Automation("execution error (-600)".into()));
        assert!(matches!(
            err,
            SplitterError::Connection { backend: "iTerm2", .. }
        ));
    }
}
