//! Error types for the API

use crate::domain::error::BuildError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Lexicon was malformed or internally inconsistent
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(#[from] BuildError),

    /// Configuration error outside the lexicon itself
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
