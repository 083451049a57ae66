//! Error types for statement assembly.
//!
//! Absent clause values are never errors: their clauses are dropped. Errors
//! only cover the few operations that cannot do their job at all.

use thiserror::Error;

/// Statement assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The window rewrite found no ` FROM` token to splice the row-numbering
    /// column before.
    #[error("window rewrite needs a ` FROM` token in: {sql}")]
    MissingFrom {
        /// The statement text at the time of the rewrite.
        sql: String,
    },

    /// No operator is registered under this name.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

/// Result type alias for statement assembly.
pub type Result<T> = std::result::Result<T, QueryError>;
