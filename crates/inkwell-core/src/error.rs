//! Store-level error types.

use thiserror::Error;

/// Failures reported by a post store.
///
/// Query and constraint variants carry the store's own message text, because
/// the editor surfaces it to the user unmodified.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    Constraint(String),

    #[error("post not found")]
    NotFound,
}
