//! Error types for tree operations.
//!
//! Structural misuse of the tree (an out-of-range child index, inserting a
//! node that already has a parent, removing a node through the wrong parent)
//! is a programming error and panics at the call site. `TreeError` covers the
//! remaining case: an operation the tree recognizes but cannot carry out.

use std::fmt;

/// The error type returned by fallible tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested operation exists but is not supported by this tree.
    Unsupported {
        /// Short name of the operation that was attempted.
        operation: &'static str,
        /// What the caller asked for that could not be done.
        detail: String,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { operation, detail } if detail.is_empty() => {
                write!(f, "unsupported operation: {operation}")
            }
            Self::Unsupported { operation, detail } => {
                write!(f, "unsupported operation: {operation} ({detail})")
            }
        }
    }
}

impl std::error::Error for TreeError {}
