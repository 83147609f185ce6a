//! Diff command
//!
//! Usage: textdiff <LEFT> <RIGHT> [--label <LABEL>] [--tool <PATH>] [--log <FORMAT>]

use clap::{Args, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use textdiff_core::logging_facility::{init, Profile};
use textdiff_core::TextDiffer;

/// Path argument meaning "read from standard input"
const STDIN_PATH: &str = "-";

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Left-hand file (`-` for stdin)
    pub left: PathBuf,

    /// Right-hand file (`-` for stdin)
    pub right: PathBuf,

    /// Prefix for the temporary file names
    #[arg(short, long, default_value = "textdiff")]
    pub label: String,

    /// Diff executable to run instead of the platform default
    #[arg(short, long)]
    pub tool: Option<PathBuf>,

    /// Diagnostic log output on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Off)]
    pub log: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// No diagnostics
    Off,
    /// Human-readable diagnostics
    Dev,
    /// JSON diagnostics
    Json,
}

/// What the comparison found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Different,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    match args.log {
        LogFormat::Off => {}
        LogFormat::Dev => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
    }

    if is_stdin(&args.left) && is_stdin(&args.right) {
        return Err("standard input can only be used for one side".into());
    }

    let left = read_input(&args.left)?;
    let right = read_input(&args.right)?;

    let mut differ = TextDiffer::new();
    if let Some(tool) = args.tool {
        differ = differ.with_tool(tool);
    }

    let output = differ.diff(&args.label, &left, &right)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if output.is_empty() {
        Ok(Outcome::Identical)
    } else {
        Ok(Outcome::Different)
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn read_input(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dash_means_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-")));
        assert!(!is_stdin(Path::new("file.txt")));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("left.txt");
        std::fs::write(&path, b"contents").unwrap();

        assert_eq!(read_input(&path).unwrap(), b"contents");
    }

    #[test]
    fn test_read_missing_input_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(&path).unwrap_err();

        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_both_sides_from_stdin_rejected() {
        let args = DiffArgs {
            left: PathBuf::from("-"),
            right: PathBuf::from("-"),
            label: "textdiff".to_string(),
            tool: None,
            log: LogFormat::Off,
        };

        let err = execute(args).unwrap_err();

        assert!(err.to_string().contains("standard input"));
    }
}
