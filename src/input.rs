//! Command list resolution.
//!
//! Commands come from the command line when any are given, otherwise from a
//! plain-text file with one command per line. Lines are trimmed and blank
//! lines are skipped, so the result never contains an empty command.

use crate::error::{Result, SplitterError};
use std::path::Path;

/// Trim each line and drop the blank ones, preserving order.
///
/// # Examples
///
/// ```
/// use iterm_splitter::input::parse_commands;
///
/// let cmds = parse_commands("  htop \n\n   \nls -la\n");
/// assert_eq!(cmds, vec!["htop", "ls -la"]);
/// ```
pub fn parse_commands(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read commands from a command-list file.
///
/// # Errors
///
/// - [`SplitterError::FileNotFound`] if the file doesn't exist
/// - [`SplitterError::NoCommands`] if it holds only blank lines
/// - [`SplitterError::Io`] if reading fails
pub fn read_commands_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(SplitterError::FileNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let commands = parse_commands(&contents);
    if commands.is_empty() {
        return Err(SplitterError::NoCommands(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), count = commands.len(), "read command file");
    Ok(commands)
}

/// Resolve the ordered command list.
///
/// Positional arguments win when any survive trimming; otherwise the
/// command file at `file` is read.
pub fn resolve(args: &[String], file: &Path) -> Result<Vec<String>> {
    let from_args: Vec<String> = args
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect();

    if !from_args.is_empty() {
        return Ok(from_args);
    }

    read_commands_file(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_args_take_precedence_over_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("its.txt");
        std::fs::write(&file, "from-file\n").unwrap();

        let args = vec!["ls".to_string(), " htop ".to_string()];
        assert_eq!(resolve(&args, &file).unwrap(), vec!["ls", "htop"]);
    }

    #[test]
    fn test_falls_back_to_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("its.txt");
        std::fs::write(&file, "npm run dev\n\n  cargo watch  \n").unwrap();

        assert_eq!(
            resolve(&[], &file).unwrap(),
            vec!["npm run dev", "cargo watch"]
        );
    }

    #[test]
    fn test_blank_args_fall_back_to_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("its.txt");
        std::fs::write(&file, "top\n").unwrap();

        let args = vec!["   ".to_string()];
        assert_eq!(resolve(&args, &file).unwrap(), vec!["top"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("its.txt");
        assert!(matches!(
            resolve(&[], &file),
            Err(SplitterError::FileNotFound(p)) if p == file
        ));
    }

    #[test]
    fn test_blank_only_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("its.txt");
        std::fs::write(&file, "\n   \n\t\n").unwrap();
        assert!(matches!(
            resolve(&[], &file),
            Err(SplitterError::NoCommands(p)) if p == file
        ));
    }

    #[test]
    fn test_parse_commands_handles_crlf() {
        assert_eq!(parse_commands("a\r\nb\r\n"), vec!["a", "b"]);
    }
}
