//! Error types and exit codes for the campus navigator
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown or duplicate location, invalid weight)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph rejected the input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus navigator operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("location already exists: {name}")]
    DuplicateLocation { name: String },

    #[error("location not found: {name}")]
    UnknownLocation { name: String },

    #[error("edge weight must be between 1 and {max}, got {weight}", max = crate::graph::MAX_EDGE_WEIGHT)]
    InvalidWeight { weight: i64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a location name that does not resolve
    pub fn unknown_location(name: impl Into<String>) -> Self {
        CampusError::UnknownLocation { name: name.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UnknownFormat(_)
            | CampusError::UnknownAlgorithm(_)
            | CampusError::UsageError(_)
            | CampusError::InvalidValue { .. } => ExitCode::Usage,

            CampusError::DuplicateLocation { .. }
            | CampusError::UnknownLocation { .. }
            | CampusError::InvalidWeight { .. } => ExitCode::Data,

            CampusError::Io(_)
            | CampusError::Toml(_)
            | CampusError::Json(_)
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownFormat(_) => "unknown_format",
            CampusError::UnknownAlgorithm(_) => "unknown_algorithm",
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidValue { .. } => "invalid_value",
            CampusError::DuplicateLocation { .. } => "duplicate_location",
            CampusError::UnknownLocation { .. } => "unknown_location",
            CampusError::InvalidWeight { .. } => "invalid_weight",
            CampusError::Io(_) => "io_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::Json(_) => "json_error",
            CampusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for campus navigator operations
pub type Result<T> = std::result::Result<T, CampusError>;
