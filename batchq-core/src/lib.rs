//! Core types for the batchq batched statevector simulator
//!
//! This crate provides the foundation shared by the state and gate crates:
//! - [`operators`]: fixed base-operator matrices (I, X, Y, Z) and the
//!   name-keyed registry lookup
//! - [`ParamBatch`]: a batch of real gate parameters, one column per
//!   simulation instance
//! - [`MatrixBatch`]: a batch of small complex gate matrices with a
//!   trailing batch axis
//!
//! # Example
//! ```
//! use batchq_core::{base_operator, ParamBatch};
//!
//! let pauli_x = base_operator("X").unwrap();
//! assert_eq!(pauli_x[0][1].re, 1.0);
//!
//! let thetas = ParamBatch::from_row(&[0.1, 0.2, 0.3]);
//! assert_eq!(thetas.batch_size(), 3);
//! ```

pub mod error;
pub mod matrix;
pub mod operators;
pub mod params;

// Re-exports for convenience
pub use error::CoreError;
pub use matrix::MatrixBatch;
pub use num_complex::Complex64;
pub use operators::{base_operator, Matrix2, Matrix4};
pub use params::ParamBatch;

/// Type alias for results in batchq-core
pub type Result<T> = std::result::Result<T, CoreError>;
