//! Error types for expiring lists
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == List Error Enum ==
/// Unified error type for list operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the live range of the list
    #[error("Index: {index}, Size: {size}")]
    OutOfRange { index: usize, size: usize },

    /// Structural lookup of a node that holds no entry
    #[error("Node not found: {0}")]
    NotFound(String),

    /// Cursor advanced past the purge-adjusted end of the list
    #[error("Iteration exhausted at cursor {0}")]
    IterationExhausted(usize),
}

// == Result Type Alias ==
/// Convenience Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
