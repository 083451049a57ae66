//! Error types for statement documents.

use sqlweave_core::QueryError;

/// Errors that can occur while turning a document into a statement.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The statement builder rejected the document.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A two-value operator was given something else than two values.
    #[error("Filter on '{column}' with operator '{op}' needs exactly two values")]
    PairExpected {
        /// Filtered column.
        column: String,
        /// Operator name.
        op: String,
    },

    /// A single-value operator was given a value pair.
    #[error("Filter on '{column}' with operator '{op}' takes a single value")]
    SingleExpected {
        /// Filtered column.
        column: String,
        /// Operator name.
        op: String,
    },

    /// IO error (reading the document).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for this statement.
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for document handling.
pub type Result<T> = std::result::Result<T, DocumentError>;
