//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The fixture's annotations could not be attributed.
    #[error("attribution failed: {0}")]
    Attribution(#[from] sayswho::AttributionError),
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
