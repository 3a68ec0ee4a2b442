//! Error types for batched state operations

use thiserror::Error;

/// Errors that can occur during batched state operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Duplicate qubit in a gate application
    #[error("Duplicate qubit {0} in gate application")]
    DuplicateQubit(usize),

    /// Dimension mismatch between a matrix batch and its target qubits
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// State and matrix batches disagree on the number of instances
    #[error("Batch size mismatch: state has {state} instances, matrices have {matrices}")]
    BatchSizeMismatch { state: usize, matrices: usize },

    /// Register too large to allocate as a dense statevector
    #[error("Invalid state dimension {dimension}: registers above 30 qubits are not supported")]
    InvalidDimension { dimension: usize },

    /// Batch axis of size zero
    #[error("Batch size must be at least 1")]
    EmptyBatch,

    /// Simulation instance index out of range
    #[error("Instance {index} out of range for batch of {batch_size}")]
    InstanceOutOfRange { index: usize, batch_size: usize },
}

/// Result type for batched state operations
pub type Result<T> = std::result::Result<T, StateError>;
