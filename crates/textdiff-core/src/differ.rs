//! Byte-buffer diffing through the host `diff` executable
//!
//! Each call writes both inputs to their own temporary artifacts, runs the
//! diff tool over the two paths and returns whatever the tool printed.
//! Artifacts are RAII guards, so they are removed on every exit path.

use crate::errors::{Result, TextDiffError};
use crate::schema::OP_DIFF;
use crate::{log_op_end, log_op_error, log_op_start};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use tempfile::TempPath;

/// Diff executable used on Plan 9, where `diff` lives under the APE tree
const PLAN9_TOOL: &str = "/bin/ape/diff";

/// Diff executable resolved through `PATH` everywhere else
const SYSTEM_TOOL: &str = "diff";

/// The diff executable for the host operating system
pub fn default_tool() -> PathBuf {
    tool_for_os(std::env::consts::OS)
}

fn tool_for_os(os: &str) -> PathBuf {
    match os {
        "plan9" => PathBuf::from(PLAN9_TOOL),
        _ => PathBuf::from(SYSTEM_TOOL),
    }
}

/// Raw output of the diff tool
///
/// Stdout and stderr combined, in the order the tool wrote them. Empty when
/// the inputs are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOutput(Vec<u8>);

impl DiffOutput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Output decoded as UTF-8, with invalid sequences replaced
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl AsRef<[u8]> for DiffOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<DiffOutput> for Vec<u8> {
    fn from(output: DiffOutput) -> Self {
        output.0
    }
}

/// A temporary file holding one side of a comparison
///
/// The file handle is closed once the contents are written; the path is
/// deleted when the artifact is dropped. Deletion is best effort.
#[derive(Debug)]
pub struct TempArtifact {
    path: TempPath,
}

impl TempArtifact {
    /// Create a uniquely named file in `dir` whose name starts with `label`,
    /// containing `data` followed by a single newline.
    ///
    /// # Errors
    ///
    /// Returns [`TextDiffError::TempFileCreate`] if the file cannot be
    /// created and [`TextDiffError::TempFileWrite`] if it cannot be written.
    /// A partially written file is removed before returning.
    pub fn create(dir: &Path, label: &str, data: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(label)
            .tempfile_in(dir)
            .map_err(|e| TextDiffError::temp_create(label, e))?;

        write_contents(file.as_file_mut(), data)
            .map_err(|e| TextDiffError::temp_write(file.path(), e))?;

        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_contents(file: &mut File, data: &[u8]) -> std::io::Result<()> {
    file.write_all(data)?;
    file.write_all(b"\n")?;
    file.flush()
}

/// Runs the host diff tool over two byte buffers
///
/// Holds no state between calls; one value can be shared across threads.
///
/// # Example
///
/// ```no_run
/// use textdiff_core::TextDiffer;
///
/// let differ = TextDiffer::new();
/// let out = differ.diff("golden", b"expected", b"actual").unwrap();
/// print!("{}", out.to_string_lossy());
/// ```
#[derive(Debug, Clone)]
pub struct TextDiffer {
    tool: PathBuf,
    temp_dir: PathBuf,
}

impl Default for TextDiffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDiffer {
    /// Differ using the platform diff tool and the system temp directory
    pub fn new() -> Self {
        Self {
            tool: default_tool(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Use `tool` instead of the platform diff executable
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Create temporary artifacts in `dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Diff `a` against `b`, returning the tool's combined output.
    ///
    /// `label` is used as a prefix for the temporary file names; uniqueness
    /// comes from the temp file facility, not from the label.
    ///
    /// A non-zero exit status is not an error as long as the tool printed
    /// something: `diff` exits with 1 whenever the inputs differ.
    ///
    /// # Errors
    ///
    /// - [`TextDiffError::TempFileCreate`] / [`TextDiffError::TempFileWrite`]
    ///   when an input cannot be persisted; the tool is not run.
    /// - [`TextDiffError::OutputCapture`] when the output buffer cannot be
    ///   created or read back.
    /// - [`TextDiffError::Spawn`] when the tool cannot be started.
    /// - [`TextDiffError::ToolFailed`] when the tool exits unsuccessfully
    ///   and prints nothing.
    pub fn diff(&self, label: &str, a: &[u8], b: &[u8]) -> Result<DiffOutput> {
        let started = Instant::now();
        log_op_start!(
            OP_DIFF,
            label = label,
            a_len = a.len(),
            b_len = b.len(),
            tool = %self.tool.display(),
        );

        match self.run(label, a, b) {
            Ok((output, status)) => {
                if !status.success() {
                    tracing::debug!(
                        label = label,
                        exit_code = status.code(),
                        "diff tool reported differences"
                    );
                }
                log_op_end!(
                    OP_DIFF,
                    duration_ms = started.elapsed().as_millis() as u64,
                    label = label,
                    output_len = output.len(),
                    exit_code = status.code(),
                );
                Ok(output)
            }
            Err(err) => {
                log_op_error!(
                    OP_DIFF,
                    &err,
                    duration_ms = started.elapsed().as_millis() as u64,
                    label = label,
                );
                Err(err)
            }
        }
    }

    fn run(&self, label: &str, a: &[u8], b: &[u8]) -> Result<(DiffOutput, ExitStatus)> {
        let left = TempArtifact::create(&self.temp_dir, label, a)?;
        let right = TempArtifact::create(&self.temp_dir, label, b)?;

        // Both streams share one file description, so their writes interleave
        // exactly as they would on a terminal.
        let mut sink = tempfile::tempfile_in(&self.temp_dir).map_err(TextDiffError::capture)?;
        let stdout = sink.try_clone().map_err(TextDiffError::capture)?;
        let stderr = sink.try_clone().map_err(TextDiffError::capture)?;

        let status = Command::new(&self.tool)
            .arg(left.path())
            .arg(right.path())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|e| TextDiffError::spawn(&self.tool, e))?;

        let mut output = Vec::new();
        sink.seek(SeekFrom::Start(0))
            .and_then(|_| sink.read_to_end(&mut output))
            .map_err(TextDiffError::capture)?;

        if !status.success() && output.is_empty() {
            return Err(TextDiffError::ToolFailed {
                tool: self.tool.display().to_string(),
                status: status.to_string(),
                exit_code: status.code(),
            });
        }

        Ok((DiffOutput(output), status))
    }
}

/// Diff two buffers with the default [`TextDiffer`]
///
/// # Errors
///
/// See [`TextDiffer::diff`].
pub fn diff(label: &str, a: &[u8], b: &[u8]) -> Result<DiffOutput> {
    TextDiffer::new().diff(label, a, b)
}
