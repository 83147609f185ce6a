use thiserror::Error;

/// Result type alias using TextDiffError
pub type Result<T> = std::result::Result<T, TextDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically, independent of the concrete failure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffErrorKind {
    /// A temporary artifact or the output buffer could not be created or accessed
    Io,
    /// The diff tool could not be started, or failed without producing output
    Execution,
}

impl DiffErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DiffErrorKind::Io => "ERR_IO",
            DiffErrorKind::Execution => "ERR_EXECUTION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification of a failure plus the context of the diff
/// call it happened in. Produced from [`TextDiffError`] for logging and for
/// callers that want stable codes instead of matching on variants.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: DiffErrorKind,
    op: Option<String>,
    label: Option<String>,
    tool: Option<String>,
    exit_code: Option<i32>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: DiffErrorKind) -> Self {
        Self {
            kind,
            op: None,
            label: None,
            tool: None,
            exit_code: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the caller-supplied temp file label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add the diff tool that was invoked
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Add the exit code reported by the diff tool
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> DiffErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(label) = &self.label {
            write!(f, " (label: {})", label)?;
        }
        if let Some(tool) = &self.tool {
            write!(f, " (tool: {})", tool)?;
        }
        if let Some(code) = self.exit_code {
            write!(f, " (exit_code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failures of a single diff call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextDiffError {
    /// The temporary file could not be created
    #[error("Failed to create temp file with label '{label}': {reason}")]
    TempFileCreate { label: String, reason: String },

    /// The temporary file was created but its contents could not be written
    #[error("Failed to write temp file {path}: {reason}")]
    TempFileWrite { path: String, reason: String },

    /// The buffer capturing the tool's output could not be created or read
    #[error("Failed to capture diff output: {reason}")]
    OutputCapture { reason: String },

    /// The diff tool could not be located or started
    #[error("Failed to run diff tool '{tool}': {reason}")]
    Spawn { tool: String, reason: String },

    /// The diff tool exited unsuccessfully without producing any output
    #[error("Diff tool '{tool}' failed with {status} and produced no output")]
    ToolFailed {
        tool: String,
        status: String,
        exit_code: Option<i32>,
    },
}

impl TextDiffError {
    /// Classify this error
    pub fn kind(&self) -> DiffErrorKind {
        match self {
            TextDiffError::TempFileCreate { .. }
            | TextDiffError::TempFileWrite { .. }
            | TextDiffError::OutputCapture { .. } => DiffErrorKind::Io,
            TextDiffError::Spawn { .. } | TextDiffError::ToolFailed { .. } => {
                DiffErrorKind::Execution
            }
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub(crate) fn temp_create(label: &str, err: std::io::Error) -> Self {
        TextDiffError::TempFileCreate {
            label: label.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn temp_write(path: &std::path::Path, err: std::io::Error) -> Self {
        TextDiffError::TempFileWrite {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn capture(err: std::io::Error) -> Self {
        TextDiffError::OutputCapture {
            reason: err.to_string(),
        }
    }

    pub(crate) fn spawn(tool: &std::path::Path, err: std::io::Error) -> Self {
        TextDiffError::Spawn {
            tool: tool.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<TextDiffError> for ExError {
    fn from(err: TextDiffError) -> Self {
        let message = err.to_string();
        let base = ExError::new(err.kind()).with_message(message);
        match err {
            TextDiffError::TempFileCreate { label, .. } => {
                base.with_op("create_temp_file").with_label(label)
            }
            TextDiffError::TempFileWrite { .. } => base.with_op("write_temp_file"),
            TextDiffError::OutputCapture { .. } => base.with_op("capture_output"),
            TextDiffError::Spawn { tool, .. } => base.with_op("spawn_tool").with_tool(tool),
            TextDiffError::ToolFailed {
                tool, exit_code, ..
            } => {
                let ex = base.with_op("run_tool").with_tool(tool);
                match exit_code {
                    Some(code) => ex.with_exit_code(code),
                    None => ex,
                }
            }
        }
    }
}

impl From<&TextDiffError> for ExError {
    fn from(err: &TextDiffError) -> Self {
        err.clone().into()
    }
}
