//! Fixed (non-parametric) gates
//!
//! A [`PrimitiveGate`] binds one constant matrix to qubit positions. Its
//! `matrices` method broadcasts that matrix across a batch, so primitive
//! and parametrized gates share the same apply/forward surface; the only
//! difference is that `forward` needs no parameters.
//!
//! These are the workhorses for state preparation, e.g. flipping a control
//! qubit to |1> before a controlled rotation.

use crate::error::{GateError, Result};
use crate::matrices::{CNOT, HADAMARD, S_GATE, T_GATE};
use batchq_core::operators::{IDENTITY, PAULI_X, PAULI_Y, PAULI_Z};
use batchq_core::{Matrix2, Matrix4, MatrixBatch};
use batchq_state::{apply_batch_gate, BatchedState};
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone)]
enum FixedMatrix {
    Single(&'static Matrix2),
    Pair(&'static Matrix4),
}

/// A fixed gate bound to qubit positions
///
/// # Example
/// ```
/// use batchq_gates::primitive::x;
/// use batchq_state::BatchedState;
///
/// let gate = x(&[0], 1).unwrap();
/// let state = BatchedState::zero(1, 1).unwrap();
/// let flipped = gate.forward(&state).unwrap();
/// assert_eq!(flipped.amplitude(1, 0).re, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PrimitiveGate {
    name: &'static str,
    matrix: FixedMatrix,
    qubits: SmallVec<[usize; 2]>,
    num_qubits: usize,
}

impl PrimitiveGate {
    fn build(
        name: &'static str,
        matrix: FixedMatrix,
        qubits: &[usize],
        num_qubits: usize,
    ) -> Result<Self> {
        let expected = match matrix {
            FixedMatrix::Single(_) => 1,
            FixedMatrix::Pair(_) => 2,
        };
        if qubits.len() != expected {
            return Err(GateError::InvalidQubitCount {
                gate: name.to_string(),
                expected,
                actual: qubits.len(),
            });
        }
        for &q in qubits {
            if q >= num_qubits {
                return Err(batchq_state::StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits,
                }
                .into());
            }
        }
        if expected == 2 && qubits[0] == qubits[1] {
            return Err(batchq_state::StateError::DuplicateQubit(qubits[0]).into());
        }
        Ok(Self {
            name,
            matrix,
            qubits: SmallVec::from_slice(qubits),
            num_qubits,
        })
    }

    /// Gate name for display
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// The qubit indices this gate is bound to
    #[inline]
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Total number of qubits in the register
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Broadcast the fixed matrix across `batch_size` instances
    pub fn matrices(&self, batch_size: usize) -> MatrixBatch {
        match self.matrix {
            FixedMatrix::Single(m) => {
                let mut out = MatrixBatch::zeros(2, batch_size);
                for r in 0..2 {
                    for c in 0..2 {
                        for b in 0..batch_size {
                            out.set(r, c, b, m[r][c]);
                        }
                    }
                }
                out
            }
            FixedMatrix::Pair(m) => {
                let mut out = MatrixBatch::zeros(4, batch_size);
                for r in 0..4 {
                    for c in 0..4 {
                        for b in 0..batch_size {
                            out.set(r, c, b, m[r][c]);
                        }
                    }
                }
                out
            }
        }
    }

    /// Apply prebuilt matrices to a state
    pub fn apply(&self, matrices: &MatrixBatch, state: &BatchedState) -> Result<BatchedState> {
        Ok(apply_batch_gate(state, matrices, &self.qubits)?)
    }

    /// Apply this gate to every instance of a state
    pub fn forward(&self, state: &BatchedState) -> Result<BatchedState> {
        let mats = self.matrices(state.batch_size());
        self.apply(&mats, state)
    }
}

impl fmt::Display for PrimitiveGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(qubits={:?}, n_qubits={})",
            self.name, self.qubits, self.num_qubits
        )
    }
}

/// Pauli-X (NOT) gate
pub fn x(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("X", FixedMatrix::Single(&PAULI_X), qubits, num_qubits)
}

/// Pauli-Y gate
pub fn y(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("Y", FixedMatrix::Single(&PAULI_Y), qubits, num_qubits)
}

/// Pauli-Z gate
pub fn z(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("Z", FixedMatrix::Single(&PAULI_Z), qubits, num_qubits)
}

/// Hadamard gate
pub fn h(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("H", FixedMatrix::Single(&HADAMARD), qubits, num_qubits)
}

/// Identity gate
pub fn id(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("I", FixedMatrix::Single(&IDENTITY), qubits, num_qubits)
}

/// S gate (sqrt(Z))
pub fn s(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("S", FixedMatrix::Single(&S_GATE), qubits, num_qubits)
}

/// T gate (pi/8)
pub fn t(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("T", FixedMatrix::Single(&T_GATE), qubits, num_qubits)
}

/// CNOT gate; `qubits` is (control, target)
pub fn cnot(qubits: &[usize], num_qubits: usize) -> Result<PrimitiveGate> {
    PrimitiveGate::build("CNOT", FixedMatrix::Pair(&CNOT), qubits, num_qubits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_x_flips_zero_state() {
        let gate = x(&[0], 2).unwrap();
        let state = BatchedState::zero(2, 3).unwrap();
        let next = gate.forward(&state).unwrap();
        for b in 0..3 {
            // |00> -> |10>: qubit 0 is the most significant bit
            assert_eq!(next.amplitude(2, b), ONE);
            assert_eq!(next.amplitude(0, b), Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_h_then_h_is_identity() {
        let gate = h(&[0], 1).unwrap();
        let state = BatchedState::zero(1, 1).unwrap();
        let back = gate.forward(&gate.forward(&state).unwrap()).unwrap();
        assert!((back.amplitude(0, 0) - ONE).norm() < 1e-12);
        assert!(back.amplitude(1, 0).norm() < 1e-12);
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        let flip = x(&[0], 2).unwrap();
        let gate = cnot(&[0, 1], 2).unwrap();
        let state = flip.forward(&BatchedState::zero(2, 1).unwrap()).unwrap();
        let next = gate.forward(&state).unwrap();
        // |10> -> |11>
        assert_eq!(next.amplitude(3, 0), ONE);
    }

    #[test]
    fn test_arity_checks() {
        assert!(x(&[0, 1], 2).is_err());
        assert!(cnot(&[0], 2).is_err());
        assert!(cnot(&[1, 1], 2).is_err());
    }

    #[test]
    fn test_display() {
        let gate = cnot(&[0, 1], 2).unwrap();
        assert_eq!(format!("{}", gate), "CNOT(qubits=[0, 1], n_qubits=2)");
    }
}
