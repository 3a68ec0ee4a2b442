//! Batched statevector representation and gate-application kernels
//!
//! This crate holds the state side of the batchq simulator:
//! - [`BatchedState`]: amplitudes for a batch of independent n-qubit
//!   registers, logical shape (2, ..., 2, batch)
//! - [`apply_batch_gate`]: contract a batch of small unitaries against
//!   targeted qubit axes, producing a new state
//! - [`embed_as_controlled`]: lift a matrix batch into controlled block
//!   form
//! - [`measurement`]: outcome probabilities and multi-shot sampling
//!
//! # Example
//! ```
//! use batchq_core::MatrixBatch;
//! use batchq_state::{apply_batch_gate, BatchedState};
//!
//! let state = BatchedState::zero(2, 4).unwrap();
//! let identity = MatrixBatch::identity(2, 4);
//! let next = apply_batch_gate(&state, &identity, &[0]).unwrap();
//! assert_eq!(next.batch_size(), 4);
//! ```

pub mod batched_op;
pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state;

pub use batched_op::{apply_batch_gate, embed_as_controlled};
pub use error::{Result, StateError};
pub use measurement::{probabilities, sample, SamplingResult};
pub use state::BatchedState;
