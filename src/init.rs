//! Interactive creation of the command-list file (`--init`).
//!
//! Prompts go to `output` and answers come from `input`, so the whole
//! exchange can be driven from a test with in-memory buffers.

use crate::error::Result;
use crate::input::parse_commands;
use std::io::{BufRead, Write};
use std::path::Path;

/// How an `--init` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The file was written with this many commands.
    Created(usize),
    /// The user declined to overwrite an existing file.
    Declined,
    /// No commands were entered; nothing was written.
    Empty,
}

/// Collect commands from `input` until end-of-input and write them to `path`.
///
/// If `path` already exists the user is asked to confirm the overwrite;
/// any answer other than `y` leaves the file untouched.
pub fn run<R, W>(path: &Path, mut input: R, mut output: W) -> Result<InitOutcome>
where
    R: BufRead,
    W: Write,
{
    if path.exists() {
        write!(
            output,
            "{} already exists. Do you want to overwrite it? (y/N): ",
            path.display()
        )?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(output, "Initialization cancelled.")?;
            return Ok(InitOutcome::Declined);
        }
    }

    writeln!(output, "Enter commands (one per line). Press Ctrl+D when done:")?;

    let mut commands = Vec::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        commands.extend(parse_commands(&line));
    }
    writeln!(output)?;

    if commands.is_empty() {
        writeln!(output, "No commands entered. Initialization cancelled.")?;
        return Ok(InitOutcome::Empty);
    }

    let mut contents = commands.join("\n");
    contents.push('\n');
    std::fs::write(path, contents)?;

    writeln!(
        output,
        "Created {} with {} commands.",
        path.display(),
        commands.len()
    )?;
    tracing::info!(path = %path.display(), count = commands.len(), "wrote command file");

    Ok(InitOutcome::Created(commands.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_creates_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("its.txt");
        let mut out = Vec::new();

        let outcome = run(&path, Cursor::new("htop\n\n  ls -la \n"), &mut out).unwrap();

        assert_eq!(outcome, InitOutcome::Created(2));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "htop\nls -la\n");
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("with 2 commands"));
        assert!(!out.contains("overwrite"));
    }

    #[test]
    fn test_decline_overwrite_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("its.txt");
        std::fs::write(&path, "original\n").unwrap();
        let mut out = Vec::new();

        let outcome = run(&path, Cursor::new("n\nnew command\n"), &mut out).unwrap();

        assert_eq!(outcome, InitOutcome::Declined);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original\n");
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Initialization cancelled."));
    }

    #[test]
    fn test_eof_at_confirmation_declines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("its.txt");
        std::fs::write(&path, "original\n").unwrap();

        let outcome = run(&path, Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(outcome, InitOutcome::Declined);
    }

    #[test]
    fn test_confirm_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("its.txt");
        std::fs::write(&path, "original\n").unwrap();

        let outcome = run(&path, Cursor::new("Y\ntop\n"), Vec::new()).unwrap();

        assert_eq!(outcome, InitOutcome::Created(1));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "top\n");
    }

    #[test]
    fn test_no_commands_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("its.txt");
        let mut out = Vec::new();

        let outcome = run(&path, Cursor::new("\n   \n"), &mut out).unwrap();

        assert_eq!(outcome, InitOutcome::Empty);
        assert!(!path.exists());
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("No commands entered"));
    }
}
