//! Error types for gate construction and application

use batchq_core::CoreError;
use batchq_state::StateError;
use thiserror::Error;

/// Errors that can occur when constructing or applying gates
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GateError {
    /// Parameter batch has the wrong leading axis for this gate
    #[error("Gate '{gate}' takes {expected} parameter(s), but the batch has {actual}")]
    ParamCountMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Gate bound to the wrong number of qubits
    #[error("Gate '{gate}' acts on {expected} qubit(s), but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Failure from the core registry or shape checks
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure from the state applicator or embedder
    #[error(transparent)]
    State(#[from] StateError),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_count_message() {
        let err = GateError::ParamCountMismatch {
            gate: "U".to_string(),
            expected: 3,
            actual: 1,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("'U'"));
        assert!(msg.contains("3"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: GateError = CoreError::UnknownOperator {
            name: "Q".to_string(),
        }
        .into();
        assert!(format!("{}", err).contains("Unknown base operator"));
    }
}
