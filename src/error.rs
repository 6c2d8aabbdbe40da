//! Error types for attribution.
//!
//! Most unusual input is recovered locally (an unpaired quotation mark just
//! never becomes a quote, an unattributable quote is dropped). The variants
//! here cover programmer errors and malformed provider output.

use thiserror::Error;

/// Errors that can occur while building documents or attributing quotes.
#[derive(Debug, Error)]
pub enum AttributionError {
    /// Boundaries were requested for a phrase with no tokens.
    #[error("cannot derive boundaries of an empty {kind} phrase")]
    EmptyPhrase { kind: &'static str },

    /// A token index points outside the document.
    #[error("token index {index} out of range for document of {len} tokens")]
    TokenOutOfRange { index: usize, len: usize },

    /// A span range is reversed or runs past the end of the document.
    #[error("invalid span {start}..{end} for document of {len} tokens")]
    InvalidSpan { start: usize, end: usize, len: usize },

    /// A token's offset and text disagree with the document text.
    #[error("token {index} does not match the document text at offset {offset}")]
    MisalignedToken { index: usize, offset: usize },

    /// Malformed CoNLL-U input.
    #[error("CoNLL-U error at line {line}: {message}")]
    Conllu { line: usize, message: String },

    /// The provider was asked to annotate text it did not produce.
    #[error("annotation provider mismatch: {message}")]
    ProviderMismatch { message: String },

    /// The provider's model differs from the configured one.
    #[error("{kind} model mismatch: configured {configured}, provider reports {reported}")]
    ModelMismatch {
        kind: &'static str,
        configured: String,
        reported: String,
    },

    /// Failure reported by an external annotation provider.
    #[error("annotation provider failed: {0}")]
    Provider(String),

    /// Failed to read a configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for attribution operations.
pub type Result<T> = std::result::Result<T, AttributionError>;
