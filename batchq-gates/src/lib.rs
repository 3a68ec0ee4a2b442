//! Parametrized and fixed quantum gates over batched statevectors
//!
//! This crate builds gate matrices as a function of batched angle
//! parameters and applies them to [`batchq_state::BatchedState`] tensors:
//!
//! - [`parametric`]: pure matrix builders for single-axis rotations
//!   (cos·I − i·sin·P), the general single-qubit U(phi, theta, omega), and
//!   the controlled-phase diagonal
//! - [`gate`]: the [`ParametricGate`] descriptor with per-name factories
//!   (`rx`, `ry`, `rz`, `u`, `crx`, `cry`, `crz`, `cphase`)
//! - [`primitive`]: fixed gates (X, Y, Z, H, I, S, T, CNOT) broadcast
//!   across the batch
//! - [`matrices`]: fixed matrices and scalar closed-form rotations
//!
//! # Example
//!
//! ```
//! use batchq_core::ParamBatch;
//! use batchq_gates::gate::{crx, rx};
//! use batchq_gates::primitive::x;
//! use batchq_state::BatchedState;
//! use std::f64::consts::PI;
//!
//! // RX over a batch of three angles
//! let gate = rx(&[0], 1).unwrap();
//! let state = BatchedState::zero(1, 3).unwrap();
//! let thetas = ParamBatch::from_row(&[0.0, PI / 2.0, PI]);
//! let rotated = gate.forward(&state, &thetas).unwrap();
//! assert_eq!(rotated.batch_size(), 3);
//!
//! // CRX fires only when the control qubit is |1>
//! let prep = x(&[0], 2).unwrap();
//! let controlled = crx(&[0, 1], 2).unwrap();
//! let state = prep.forward(&BatchedState::zero(2, 1).unwrap()).unwrap();
//! let kicked = controlled
//!     .forward(&state, &ParamBatch::from_row(&[PI]))
//!     .unwrap();
//! assert!(kicked.amplitude(3, 0).norm() > 0.999);
//! ```

pub mod error;
pub mod gate;
pub mod matrices;
pub mod parametric;
pub mod primitive;

pub use error::{GateError, Result};
pub use gate::{cphase, crx, cry, crz, rx, ry, rz, u, ParametricGate};
pub use parametric::{cphase_matrices, rot_matrices, u_matrices};
pub use primitive::PrimitiveGate;
