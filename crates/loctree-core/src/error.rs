//! Error types for loctree
//!
//! The transforms themselves are total and never fail; errors only arise at
//! the document boundary (parsing and serializing JSON text).

use thiserror::Error;

/// loctree error types
#[derive(Debug, Error)]
pub enum Error {
    /// Document is not valid JSON
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Document could not be serialized back to JSON text
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for loctree operations
pub type Result<T> = std::result::Result<T, Error>;
