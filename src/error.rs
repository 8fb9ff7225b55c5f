//! Unified error types for aegis-report.
//!
//! The loader distinguishes two failure shapes on purpose: an absent input
//! file is not an error (the pipeline falls back to a fully defaulted
//! model), while a present-but-malformed file is always fatal and names the
//! offending field path so data-entry mistakes surface instead of being
//! papered over.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aegis-report operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// Malformed or out-of-contract input data
    #[error("invalid client data at {field}: {source}")]
    DataFormat {
        /// Dotted path to the offending field, e.g.
        /// `assessment.Operations.Patch Management` or `findings[2]`
        field: String,
        #[source]
        source: DataFormatKind,
    },

    /// Failed to read an input file that exists on disk
    #[error("failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure creating directories or writing artifacts
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart or document encoding failure
    #[error("rendering failed for {context}: {message}")]
    Render { context: String, message: String },

    /// Invalid taxonomy or pipeline configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Specific data-format violation kinds.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataFormatKind {
    #[error("invalid JSON syntax: {0}")]
    InvalidJson(String),

    #[error("expected {expected}, got {got}")]
    UnexpectedType { expected: String, got: String },

    #[error("expected integer 0-5, got {got}")]
    InvalidScore { got: String },

    #[error("expected [label, description] pair of strings, got {got}")]
    MalformedFinding { got: String },
}

/// Convenient Result type for aegis-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReportError {
    /// Create a data-format error at the given field path.
    pub fn data_format(field: impl Into<String>, source: DataFormatKind) -> Self {
        Self::DataFormat {
            field: field.into(),
            source,
        }
    }

    /// Create a data-format error for a value of the wrong type.
    pub fn unexpected_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        got: &serde_json::Value,
    ) -> Self {
        Self::data_format(
            field,
            DataFormatKind::UnexpectedType {
                expected: expected.into(),
                got: describe_value(got),
            },
        )
    }

    /// Create a data-format error for a score that is not an integer 0-5.
    pub fn invalid_score(field: impl Into<String>, got: &serde_json::Value) -> Self {
        Self::data_format(
            field,
            DataFormatKind::InvalidScore {
                got: describe_value(got),
            },
        )
    }

    /// Create a data-format error for a malformed findings entry.
    pub fn malformed_finding(index: usize, got: &serde_json::Value) -> Self {
        Self::data_format(
            format!("findings[{index}]"),
            DataFormatKind::MalformedFinding {
                got: describe_value(got),
            },
        )
    }

    /// Create an output-write error with path context.
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a render error with artifact context.
    pub fn render(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Render {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Render a JSON value for an error message: scalars verbatim, containers
/// by type name so huge payloads never end up in a one-line diagnostic.
fn describe_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => format!("{s:?}"),
        serde_json::Value::Array(_) => "an array".to_string(),
        serde_json::Value::Object(_) => "an object".to_string(),
    }
}
