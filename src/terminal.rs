//! The automation surface a terminal application exposes.
//!
//! Every backend is a client of some external scripting interface (iTerm2's
//! AppleScript dictionary, the tmux CLI). Calls are asynchronous and the
//! driver awaits each one before issuing the next, because a split can only
//! target a pane that an earlier call has returned.

use crate::config::Orientation;
use crate::error::Result;
use std::fmt::Debug;

/// A connected terminal application.
#[allow(async_fn_in_trait)]
pub trait Terminal {
    /// Handle for one pane (a "session" in iTerm2 terms).
    type Session: Clone + Debug;

    /// Backend name for messages.
    fn name(&self) -> &'static str;

    /// Open a new tab in the current window, creating a window if there is
    /// none, and return the tab's initial session.
    async fn open_tab(&mut self) -> Result<Self::Session>;

    /// Split `session` and return the newly created session.
    async fn split(
        &mut self,
        session: &Self::Session,
        orientation: Orientation,
    ) -> Result<Self::Session>;

    /// Send `text` to `session` as if typed. A trailing `\n` submits the line.
    async fn send_text(&mut self, session: &Self::Session, text: &str) -> Result<()>;
}
