//! Plan execution against a live terminal.
//!
//! Operations run strictly one after another: open the tab, start the first
//! command, then for each split create the pane and immediately type its
//! command. Any failure aborts the rest of the plan and the panes created so
//! far are left as they are.

use crate::config::Orientation;
use crate::error::{Result, SplitterError};
use crate::plan::Plan;
use crate::terminal::Terminal;

/// Realize `plan` on `terminal`.
///
/// Returns every session created, in command order.
pub async fn execute<T: Terminal>(terminal: &mut T, plan: &Plan) -> Result<Vec<T::Session>> {
    tracing::info!(
        backend = terminal.name(),
        panes = plan.pane_count(),
        primaries = plan.primary_count(),
        max_v_pane = plan.max_v_pane,
        "executing layout"
    );

    let initial = terminal.open_tab().await?;
    terminal.send_text(&initial, &line(&plan.first)).await?;

    let mut primaries = vec![initial.clone()];
    let mut sessions = vec![initial];

    for entry in &plan.splits {
        let source = primaries.get(entry.source).ok_or_else(|| {
            SplitterError::Automation(format!(
                "split source {} does not exist ({} primary panes)",
                entry.source,
                primaries.len()
            ))
        })?;

        tracing::debug!(
            source = ?source,
            orientation = ?entry.orientation,
            command = %entry.command,
            "splitting pane"
        );
        let session = terminal.split(source, entry.orientation).await?;
        if entry.orientation == Orientation::Horizontal {
            primaries.push(session.clone());
        }
        terminal.send_text(&session, &line(&entry.command)).await?;
        sessions.push(session);
    }

    Ok(sessions)
}

fn line(command: &str) -> String {
    format!("{}\n", command)
}
