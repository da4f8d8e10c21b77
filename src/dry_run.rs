//! A terminal that records operations instead of performing them.
//!
//! Backs `--dry-run`: each call is printed as one line to the writer and
//! kept in an in-memory log. Pane ids are synthetic, starting at 1.

use crate::config::Orientation;
use crate::error::{Result, SplitterError};
use crate::terminal::Terminal;
use std::io::Write;

/// One recorded automation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// A tab was opened; its initial pane got this id.
    OpenTab(u32),
    /// `source` was split, creating `created`.
    Split {
        /// Pane that was split.
        source: u32,
        /// Split direction.
        orientation: Orientation,
        /// Id of the new pane.
        created: u32,
    },
    /// Text was sent to a pane.
    Send(u32, String),
}

/// Recording [`Terminal`] writing a human-readable trace to `W`.
pub struct DryRun<W: Write> {
    out: W,
    ops: Vec<Op>,
    next_id: u32,
    splits_left: Option<usize>,
}

impl<W: Write> DryRun<W> {
    /// Create a recorder that prints to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            ops: Vec::new(),
            next_id: 1,
            splits_left: None,
        }
    }

    /// Make every split after the first `n` fail.
    pub fn fail_split_after(mut self, n: usize) -> Self {
        self.splits_left = Some(n);
        self
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<W: Write> Terminal for DryRun<W> {
    type Session = u32;

    fn name(&self) -> &'static str {
        "dry run"
    }

    async fn open_tab(&mut self) -> Result<u32> {
        let id = self.allocate();
        writeln!(self.out, "new tab -> pane {}", id)?;
        self.ops.push(Op::OpenTab(id));
        Ok(id)
    }

    async fn split(&mut self, session: &u32, orientation: Orientation) -> Result<u32> {
        if let Some(left) = self.splits_left.as_mut() {
            if *left == 0 {
                return Err(SplitterError::Automation(format!(
                    "split of pane {} refused",
                    session
                )));
            }
            *left -= 1;
        }

        let id = self.allocate();
        writeln!(
            self.out,
            "split pane {} {} -> pane {}",
            session,
            orientation.to_applescript(),
            id
        )?;
        self.ops.push(Op::Split {
            source: *session,
            orientation,
            created: id,
        });
        Ok(id)
    }

    async fn send_text(&mut self, session: &u32, text: &str) -> Result<()> {
        writeln!(self.out, "send pane {}: {}", session, text.trim_end_matches('\n'))?;
        self.ops.push(Op::Send(*session, text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trace_output() {
        let mut term = DryRun::new(Vec::new());
        let first = term.open_tab().await.unwrap();
        let second = term.split(&first, Orientation::Horizontal).await.unwrap();
        term.send_text(&second, "htop\n").await.unwrap();

        let out = String::from_utf8(term.out).unwrap();
        assert_eq!(
            out,
            "new tab -> pane 1\nsplit pane 1 horizontally -> pane 2\nsend pane 2: htop\n"
        );
    }
}
