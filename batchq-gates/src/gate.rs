//! Parametrized gate objects
//!
//! A [`ParametricGate`] is an immutable descriptor binding a gate kind to
//! its target (and control) qubits, the total register size, and the fixed
//! base matrices it builds from. One descriptor type covers every
//! parametrized gate; the per-name constructors ([`rx`], [`crz`],
//! [`u`], [`cphase`], ...) are plain configuration over a tagged kind, not
//! a type hierarchy.
//!
//! Every gate exposes the same three operations:
//! - `matrices(params)` builds the batch of unitaries for a parameter batch
//! - `apply(matrices, state)` contracts prebuilt matrices against a state
//! - `forward(state, params)` composes the two
//!
//! Splitting `matrices` from `apply` keeps the matrix construction reusable
//! by gradient rules that perturb parameters and re-apply.

use crate::error::{GateError, Result};
use crate::parametric::{cphase_matrices, rot_matrices, u_matrices};
use batchq_core::operators::IDENTITY;
use batchq_core::{base_operator, Matrix2, MatrixBatch, ParamBatch};
use batchq_state::{apply_batch_gate, embed_as_controlled, BatchedState};
use smallvec::SmallVec;
use std::fmt;

/// What a parametrized gate builds and how it is applied
#[derive(Debug, Clone)]
enum GateKind {
    /// Single-axis rotation, optionally conditioned on a control qubit
    Rotation {
        pauli: &'static Matrix2,
        controlled: bool,
    },
    /// General single-qubit rotation U(phi, theta, omega)
    Universal,
    /// Phase on the |11> component of a qubit pair
    ControlledPhase,
}

/// An immutable parametrized gate bound to qubit positions
///
/// # Example
/// ```
/// use batchq_core::ParamBatch;
/// use batchq_gates::gate::rx;
/// use batchq_state::BatchedState;
///
/// let gate = rx(&[0], 1).unwrap();
/// let state = BatchedState::zero(1, 2).unwrap();
/// let thetas = ParamBatch::from_row(&[0.0, std::f64::consts::PI]);
/// let next = gate.forward(&state, &thetas).unwrap();
/// assert_eq!(next.batch_size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ParametricGate {
    kind: GateKind,
    name: &'static str,
    qubits: SmallVec<[usize; 2]>,
    num_qubits: usize,
    identity: &'static Matrix2,
}

impl ParametricGate {
    fn build(
        kind: GateKind,
        name: &'static str,
        qubits: &[usize],
        num_qubits: usize,
    ) -> Result<Self> {
        let expected = match kind {
            GateKind::Rotation { controlled, .. } => {
                if controlled {
                    2
                } else {
                    1
                }
            }
            GateKind::Universal => 1,
            GateKind::ControlledPhase => 2,
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
        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(batchq_state::StateError::DuplicateQubit(qubits[i]).into());
                }
            }
        }
        Ok(Self {
            kind,
            name,
            qubits: SmallVec::from_slice(qubits),
            num_qubits,
            identity: &IDENTITY,
        })
    }

    /// Rotation gate about the axis of a registry operator ("X", "Y", "Z")
    ///
    /// # Errors
    /// Fails with an unknown-operator error for unrecognized axis names,
    /// or a qubit-count/index error for an invalid binding.
    pub fn rotation(axis: &str, qubits: &[usize], num_qubits: usize) -> Result<Self> {
        let pauli = base_operator(axis)?;
        let name = match axis {
            "X" => "RX",
            "Y" => "RY",
            "Z" => "RZ",
            _ => "R",
        };
        Self::build(
            GateKind::Rotation {
                pauli,
                controlled: false,
            },
            name,
            qubits,
            num_qubits,
        )
    }

    /// Controlled rotation: `qubits` is (control, target)
    pub fn controlled_rotation(axis: &str, qubits: &[usize], num_qubits: usize) -> Result<Self> {
        let pauli = base_operator(axis)?;
        let name = match axis {
            "X" => "CRX",
            "Y" => "CRY",
            "Z" => "CRZ",
            _ => "CR",
        };
        Self::build(
            GateKind::Rotation {
                pauli,
                controlled: true,
            },
            name,
            qubits,
            num_qubits,
        )
    }

    /// Number of parameter rows this gate expects
    #[inline]
    pub fn num_params(&self) -> usize {
        match self.kind {
            GateKind::Universal => 3,
            _ => 1,
        }
    }

    /// Gate name for display ("RX", "CRZ", "U", "CPHASE")
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// The qubit indices this gate is bound to, in application order
    #[inline]
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Total number of qubits in the register
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The single parameter row, after the documented shape normalization
    ///
    /// Accepts a batch of shape (1, B), however the caller spelled it, and
    /// rejects anything else, so a (3, B) batch meant for the U gate can
    /// never be silently read as angles.
    fn single_param_row<'p>(&self, params: &'p ParamBatch) -> Result<&'p [f64]> {
        if params.num_params() != 1 {
            return Err(GateError::ParamCountMismatch {
                gate: self.name.to_string(),
                expected: 1,
                actual: params.num_params(),
            });
        }
        Ok(params.row(0))
    }

    /// Build the batch of gate matrices for a parameter batch
    ///
    /// For rotation gates (controlled or not) the result is the plain 2x2
    /// rotation batch; controlled rotations take their block form during
    /// [`Self::apply`]. The controlled-phase gate returns its full 4x4
    /// diagonal batch directly.
    pub fn matrices(&self, params: &ParamBatch) -> Result<MatrixBatch> {
        match &self.kind {
            GateKind::Rotation { pauli, .. } => {
                let theta = self.single_param_row(params)?;
                Ok(rot_matrices(theta, pauli, self.identity))
            }
            GateKind::Universal => u_matrices(params),
            GateKind::ControlledPhase => {
                let theta = self.single_param_row(params)?;
                Ok(cphase_matrices(theta))
            }
        }
    }

    /// Apply prebuilt gate matrices to a state, returning the new state
    ///
    /// Controlled rotations embed the 2x2 batch as the lower-right block of
    /// a 4x4 controlled operation first, then contract over
    /// (control, target).
    pub fn apply(&self, matrices: &MatrixBatch, state: &BatchedState) -> Result<BatchedState> {
        match &self.kind {
            GateKind::Rotation {
                controlled: true, ..
            } => {
                let controlled = embed_as_controlled(matrices);
                Ok(apply_batch_gate(state, &controlled, &self.qubits)?)
            }
            _ => Ok(apply_batch_gate(state, matrices, &self.qubits)?),
        }
    }

    /// Build matrices for `params` and apply them to `state`
    pub fn forward(&self, state: &BatchedState, params: &ParamBatch) -> Result<BatchedState> {
        let mats = self.matrices(params)?;
        self.apply(&mats, state)
    }
}

impl fmt::Display for ParametricGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(qubits={:?}, n_qubits={})",
            self.name, self.qubits, self.num_qubits
        )
    }
}

/// X-axis rotation on one target qubit
pub fn rx(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::rotation("X", qubits, num_qubits)
}

/// Y-axis rotation on one target qubit
pub fn ry(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::rotation("Y", qubits, num_qubits)
}

/// Z-axis rotation on one target qubit
pub fn rz(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::rotation("Z", qubits, num_qubits)
}

/// General single-qubit rotation U(phi, theta, omega) on one target qubit
pub fn u(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::build(GateKind::Universal, "U", qubits, num_qubits)
}

/// Controlled X-axis rotation; `qubits` is (control, target)
pub fn crx(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::controlled_rotation("X", qubits, num_qubits)
}

/// Controlled Y-axis rotation; `qubits` is (control, target)
pub fn cry(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::controlled_rotation("Y", qubits, num_qubits)
}

/// Controlled Z-axis rotation; `qubits` is (control, target)
pub fn crz(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::controlled_rotation("Z", qubits, num_qubits)
}

/// Controlled phase on a qubit pair
pub fn cphase(qubits: &[usize], num_qubits: usize) -> Result<ParametricGate> {
    ParametricGate::build(GateKind::ControlledPhase, "CPHASE", qubits, num_qubits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use batchq_core::CoreError;
    use batchq_state::StateError;

    #[test]
    fn test_factories_set_names_and_arity() {
        assert_eq!(rx(&[0], 1).unwrap().name(), "RX");
        assert_eq!(ry(&[0], 1).unwrap().name(), "RY");
        assert_eq!(rz(&[0], 1).unwrap().name(), "RZ");
        assert_eq!(u(&[0], 1).unwrap().name(), "U");
        assert_eq!(crx(&[0, 1], 2).unwrap().name(), "CRX");
        assert_eq!(cry(&[0, 1], 2).unwrap().name(), "CRY");
        assert_eq!(crz(&[0, 1], 2).unwrap().name(), "CRZ");
        assert_eq!(cphase(&[0, 1], 2).unwrap().name(), "CPHASE");

        assert_eq!(rx(&[0], 1).unwrap().num_params(), 1);
        assert_eq!(u(&[0], 1).unwrap().num_params(), 3);
    }

    #[test]
    fn test_rotation_rejects_unknown_axis() {
        let err = ParametricGate::rotation("H", &[0], 1).unwrap_err();
        assert_eq!(
            err,
            GateError::Core(CoreError::UnknownOperator {
                name: "H".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_qubit_count() {
        let err = rx(&[0, 1], 2).unwrap_err();
        assert_eq!(
            err,
            GateError::InvalidQubitCount {
                gate: "RX".to_string(),
                expected: 1,
                actual: 2
            }
        );
        let err = crx(&[0], 2).unwrap_err();
        assert_eq!(
            err,
            GateError::InvalidQubitCount {
                gate: "CRX".to_string(),
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_qubit_index_validation() {
        let err = rx(&[3], 2).unwrap_err();
        assert_eq!(
            err,
            GateError::State(StateError::InvalidQubitIndex {
                index: 3,
                num_qubits: 2
            })
        );
        let err = cphase(&[1, 1], 2).unwrap_err();
        assert_eq!(err, GateError::State(StateError::DuplicateQubit(1)));
    }

    #[test]
    fn test_single_param_normalization() {
        let gate = rx(&[0], 1).unwrap();
        // (B,) and (1, B) spellings both work
        let rank1 = ParamBatch::from_row(&[0.1, 0.2]);
        let rank2 = ParamBatch::new(1, 2, vec![0.1, 0.2]).unwrap();
        assert_eq!(
            gate.matrices(&rank1).unwrap(),
            gate.matrices(&rank2).unwrap()
        );

        // A (3, B) batch is rejected, not silently reinterpreted
        let three = ParamBatch::new(3, 2, vec![0.0; 6]).unwrap();
        assert_eq!(
            gate.matrices(&three).unwrap_err(),
            GateError::ParamCountMismatch {
                gate: "RX".to_string(),
                expected: 1,
                actual: 3
            }
        );
    }

    #[test]
    fn test_display() {
        let gate = crx(&[0, 1], 3).unwrap();
        assert_eq!(format!("{}", gate), "CRX(qubits=[0, 1], n_qubits=3)");
    }

    #[test]
    fn test_controlled_matrices_stay_two_by_two() {
        // The block embedding happens in apply, not matrices
        let gate = crz(&[0, 1], 2).unwrap();
        let mats = gate.matrices(&ParamBatch::from_row(&[0.7])).unwrap();
        assert_eq!(mats.dim(), 2);
    }
}
