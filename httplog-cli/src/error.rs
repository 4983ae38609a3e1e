//! CLI-specific error types and exit code mapping

use httplog_analyzer::AnalyzerError;
use httplog_core::error::HttplogError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// Log analysis failed (unreadable input, invalid count).
    #[error("analysis error: {0}")]
    Analysis(String),

    /// The input log file does not exist or is not a regular file.
    #[error("invalid input file: {0}")]
    InvalidInput(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from httplog-core.
    #[error("{0}")]
    Core(#[from] HttplogError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                       |
    /// |------|-------------------------------|
    /// | 0    | Success                       |
    /// | 1    | General / analysis error      |
    /// | 2    | Configuration error           |
    /// | 3    | Input file missing or invalid |
    /// | 10   | IO error                      |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(HttplogError::Config(_)) => 2,
            Self::InvalidInput(_) => 3,
            Self::Io(_) | Self::Core(HttplogError::Io(_)) => 10,
            Self::JsonSerialize(_) | Self::Command(_) | Self::Analysis(_) | Self::Core(_) => 1,
        }
    }
}

impl From<AnalyzerError> for CliError {
    fn from(e: AnalyzerError) -> Self {
        match e {
            AnalyzerError::InvalidFilePath { path } => Self::InvalidInput(path),
            AnalyzerError::Config { .. } => Self::Config(e.to_string()),
            AnalyzerError::Io(io) => Self::Io(io),
            other => Self::Analysis(other.to_string()),
        }
    }
}
