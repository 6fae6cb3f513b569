//! Structured error handling and exit codes.

use serde::Serialize;

use crate::scanner::ScanError;

/// Exit codes for the filesift application.
///
/// - 0: Success (completed normally, per-file failures included)
/// - 1: General error (unexpected failure)
/// - 2: Usage error (bad directory, empty extension, no matches, bad sort order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the run completed.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// Usage error: the invocation was rejected before any action ran.
    UsageError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "FS000",
            Self::GeneralError => "FS001",
            Self::UsageError => "FS002",
        }
    }

    /// Classify a fatal error returned by [`crate::run_app`].
    ///
    /// A usage-class [`ScanError`] anywhere in the chain is a usage error.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let usage = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<ScanError>())
            .is_some_and(ScanError::is_usage);
        if usage {
            Self::UsageError
        } else {
            Self::GeneralError
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "FS002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
    /// Whether the invocation itself was invalid
    pub usage: bool,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
            usage: exit_code == ExitCode::UsageError,
        }
    }
}
