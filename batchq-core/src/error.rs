//! Error types for batchq-core

use thiserror::Error;

/// Errors that can occur when building core simulation types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Base operator name not present in the registry
    #[error("Unknown base operator '{name}': expected one of I, X, Y, Z")]
    UnknownOperator { name: String },

    /// Data length inconsistent with the declared logical shape
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
