//! Error types and exit codes for pathscout
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unreadable graph file)
//!
//! Note that an unreachable or unknown node is NOT an error: path queries
//! report "no path" as a normal result and exit 0.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathscout CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unreadable graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathscout operations
#[derive(Error, Debug)]
pub enum PathscoutError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl PathscoutError {
    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PathscoutError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathscoutError::UnknownFormat(_)
            | PathscoutError::UsageError(_)
            | PathscoutError::Unsupported { .. } => ExitCode::Usage,

            PathscoutError::GraphNotFound { .. } | PathscoutError::InvalidGraph { .. } => {
                ExitCode::Data
            }

            PathscoutError::Io(_)
            | PathscoutError::Json(_)
            | PathscoutError::Yaml(_)
            | PathscoutError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathscoutError::UnknownFormat(_) => "unknown_format",
            PathscoutError::UsageError(_) => "usage_error",
            PathscoutError::Unsupported { .. } => "unsupported",
            PathscoutError::GraphNotFound { .. } => "graph_not_found",
            PathscoutError::InvalidGraph { .. } => "invalid_graph",
            PathscoutError::Io(_) => "io_error",
            PathscoutError::Json(_) => "json_error",
            PathscoutError::Yaml(_) => "yaml_error",
            PathscoutError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathscout operations
pub type Result<T> = std::result::Result<T, PathscoutError>;
