//! Error types for batch loading and reporting.
//!
//! The schedulers themselves never fail: every error here is raised by
//! the collaborators around them, before any simulation starts (loading,
//! validation) or after it ends (writing reports).

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading jobs or writing reports.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// A line could not be parsed as a job record.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Parsed jobs failed batch validation.
    #[error("invalid job batch: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Inconsistent run configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
