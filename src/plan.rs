//! Pane layout planning.
//!
//! Turns an ordered command list into the split operations that build the
//! grid. The first command runs in the tab's initial pane. The next
//! commands, up to the primary cap, each get a pane split horizontally off
//! the initial pane; these are the *primary* panes, with the initial pane at
//! index 0. Every command past the cap is an *overflow* command and gets a
//! vertical split of primary `i % cap`.
//!
//! ```text
//! commands = [a, b, c, d, e], cap = 2
//!
//!   +-----+-----+-----+
//!   |  a  |  c  |  e  |   primary 0 (initial pane)
//!   +-----+--+--+-----+
//!   |  b     |  d     |   primary 1
//!   +--------+--------+
//! ```
//!
//! Planning is pure: it never touches a terminal. See [`crate::driver`] for
//! executing a plan.

use crate::config::Orientation;
use crate::error::{Result, SplitterError};

/// One split operation: split primary pane `source` and run `command` in
/// the new pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Index into the primary pane set. Index 0 is the initial pane.
    pub source: usize,
    /// Split direction. Horizontal splits create new primary panes.
    pub orientation: Orientation,
    /// Command to send to the newly created pane.
    pub command: String,
}

/// The full layout for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Command for the pre-existing initial pane.
    pub first: String,
    /// Splits in execution order.
    pub splits: Vec<PlanEntry>,
    /// Effective primary pane cap, after clamping.
    pub max_v_pane: usize,
}

impl Plan {
    /// Number of primary panes the plan creates, the initial pane included.
    pub fn primary_count(&self) -> usize {
        1 + self
            .splits
            .iter()
            .filter(|e| e.orientation == Orientation::Horizontal)
            .count()
    }

    /// Total number of panes, one per command.
    pub fn pane_count(&self) -> usize {
        1 + self.splits.len()
    }
}

/// Clamp a user-supplied primary pane cap to at least 1.
///
/// The initial pane always exists, so a cap of zero or less would leave
/// overflow commands with nothing to attach to.
pub fn clamp_max_v_pane(requested: i64) -> usize {
    if requested < 1 {
        tracing::warn!(requested, "max-v-pane must be at least 1, using 1");
        return 1;
    }
    usize::try_from(requested).unwrap_or(usize::MAX)
}

/// Compute the split operations for `commands` with at most `max_v_pane`
/// primary panes. A cap of 0 is treated as 1.
///
/// # Errors
///
/// Returns [`SplitterError::EmptyCommands`] for an empty command list.
///
/// # Examples
///
/// ```
/// use iterm_splitter::plan::plan;
/// use iterm_splitter::Orientation;
///
/// let cmds: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
/// let plan = plan(&cmds, 4).unwrap();
/// assert_eq!(plan.first, "a");
/// assert_eq!(plan.splits.len(), 2);
/// assert!(plan.splits.iter().all(|e| e.orientation == Orientation::Horizontal));
/// ```
pub fn plan(commands: &[String], max_v_pane: usize) -> Result<Plan> {
    let (first, rest) = commands
        .split_first()
        .ok_or(SplitterError::EmptyCommands)?;
    let cap = max_v_pane.max(1);

    let splits = rest
        .iter()
        .enumerate()
        .map(|(offset, command)| {
            let i = offset + 1;
            let (source, orientation) = if i < cap {
                (0, Orientation::Horizontal)
            } else {
                (i % cap, Orientation::Vertical)
            };
            PlanEntry {
                source,
                orientation,
                command: command.clone(),
            }
        })
        .collect();

    Ok(Plan {
        first: first.clone(),
        splits,
        max_v_pane: cap,
    })
}
