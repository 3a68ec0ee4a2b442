//! Batched gate application and controlled-block embedding
//!
//! [`apply_batch_gate`] contracts a batch of small unitaries against the
//! target qubit axes of a [`BatchedState`], one matrix per simulation
//! instance, returning a new state. [`embed_as_controlled`] lifts a batch
//! of matrices into the controlled block form used by controlled gates.

use crate::error::{Result, StateError};
use crate::kernels;
use crate::state::BatchedState;
use batchq_core::MatrixBatch;
use num_complex::Complex64;
use rayon::prelude::*;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Total amplitude count below which application stays on one thread
const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Apply a batch of gate matrices to the targeted qubits of a batch of states
///
/// Instance `b` of the output is `matrices[b]` contracted against the
/// `qubits` axes of instance `b` of the input; all non-targeted axes and
/// the batch axis are preserved. The input state is not mutated.
///
/// For multi-qubit gates the order of `qubits` is significant: the first
/// listed qubit addresses the most significant bit of the matrix index, so
/// a controlled matrix in block form [[I, 0], [0, U]] expects
/// (control, target) order.
///
/// Instances are independent; batches with enough total work are applied
/// through rayon, one instance per task.
///
/// # Errors
/// - [`StateError::InvalidQubitIndex`] / [`StateError::DuplicateQubit`] if
///   the qubit list is inconsistent with the register
/// - [`StateError::DimensionMismatch`] if the matrix dimension is not
///   `2^qubits.len()`
/// - [`StateError::BatchSizeMismatch`] if state and matrices disagree on
///   the number of instances
///
/// # Example
/// ```
/// use batchq_core::MatrixBatch;
/// use batchq_state::{apply_batch_gate, BatchedState};
///
/// let state = BatchedState::zero(1, 2).unwrap();
/// let identity = MatrixBatch::identity(2, 2);
/// let next = apply_batch_gate(&state, &identity, &[0]).unwrap();
/// assert_eq!(next, state);
/// ```
pub fn apply_batch_gate(
    state: &BatchedState,
    matrices: &MatrixBatch,
    qubits: &[usize],
) -> Result<BatchedState> {
    let num_qubits = state.num_qubits();
    for &q in qubits {
        if q >= num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: q,
                num_qubits,
            });
        }
    }
    for i in 0..qubits.len() {
        for j in (i + 1)..qubits.len() {
            if qubits[i] == qubits[j] {
                return Err(StateError::DuplicateQubit(qubits[i]));
            }
        }
    }

    let expected_dim = 1usize << qubits.len();
    if matrices.dim() != expected_dim {
        return Err(StateError::DimensionMismatch {
            expected: expected_dim,
            actual: matrices.dim(),
        });
    }
    if matrices.batch_size() != state.batch_size() {
        return Err(StateError::BatchSizeMismatch {
            state: state.batch_size(),
            matrices: matrices.batch_size(),
        });
    }

    let dimension = state.dimension();
    let batch_size = state.batch_size();
    let mut out = vec![ZERO; dimension * batch_size];

    if dimension * batch_size >= PARALLEL_THRESHOLD && batch_size > 1 {
        out.par_chunks_mut(dimension)
            .zip(state.data().par_chunks(dimension))
            .enumerate()
            .for_each(|(b, (dst, src))| {
                apply_instance(src, dst, matrices, b, qubits, num_qubits);
            });
    } else {
        for b in 0..batch_size {
            let src = &state.data()[b * dimension..(b + 1) * dimension];
            let dst = &mut out[b * dimension..(b + 1) * dimension];
            apply_instance(src, dst, matrices, b, qubits, num_qubits);
        }
    }

    Ok(BatchedState::from_raw(num_qubits, batch_size, out))
}

/// Contract one instance's matrix against one instance's amplitudes
fn apply_instance(
    src: &[Complex64],
    dst: &mut [Complex64],
    matrices: &MatrixBatch,
    b: usize,
    qubits: &[usize],
    num_qubits: usize,
) {
    match qubits.len() {
        1 => {
            let mut m = [ZERO; 4];
            matrices.instance_into(b, &mut m);
            kernels::apply_single_qubit(src, dst, &m, qubits[0], num_qubits);
        }
        2 => {
            let mut m = [ZERO; 16];
            matrices.instance_into(b, &mut m);
            kernels::apply_two_qubit(src, dst, &m, qubits[0], qubits[1], num_qubits);
        }
        _ => {
            let m = matrices.instance(b);
            kernels::apply_k_qubit(src, dst, &m, qubits, num_qubits);
        }
    }
}

/// Embed a batch of matrices as the lower-right block of a controlled operation
///
/// Doubles the linear dimension: the upper-left block is the identity (the
/// control-qubit-|0> subspace is untouched) and the lower-right block is
/// the input matrix. The output is freshly allocated.
///
/// # Example
/// ```
/// use batchq_core::MatrixBatch;
/// use batchq_state::embed_as_controlled;
///
/// let rot = MatrixBatch::identity(2, 1);
/// let controlled = embed_as_controlled(&rot);
/// assert_eq!(controlled.dim(), 4);
/// ```
pub fn embed_as_controlled(matrices: &MatrixBatch) -> MatrixBatch {
    let dim = matrices.dim();
    let batch_size = matrices.batch_size();
    let mut out = MatrixBatch::identity(dim * 2, batch_size);
    for r in 0..dim {
        for c in 0..dim {
            for b in 0..batch_size {
                out.set(dim + r, dim + c, b, matrices.get(r, c, b));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_identity_application_preserves_state() {
        let state = BatchedState::uniform(3, 2).unwrap();
        let identity = MatrixBatch::identity(2, 2);
        let next = apply_batch_gate(&state, &identity, &[1]).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn test_rejects_out_of_range_qubit() {
        let state = BatchedState::zero(2, 1).unwrap();
        let m = MatrixBatch::identity(2, 1);
        assert_eq!(
            apply_batch_gate(&state, &m, &[2]).unwrap_err(),
            StateError::InvalidQubitIndex {
                index: 2,
                num_qubits: 2
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_qubits() {
        let state = BatchedState::zero(2, 1).unwrap();
        let m = MatrixBatch::identity(4, 1);
        assert_eq!(
            apply_batch_gate(&state, &m, &[1, 1]).unwrap_err(),
            StateError::DuplicateQubit(1)
        );
    }

    #[test]
    fn test_rejects_wrong_matrix_dimension() {
        let state = BatchedState::zero(2, 1).unwrap();
        let m = MatrixBatch::identity(4, 1);
        assert_eq!(
            apply_batch_gate(&state, &m, &[0]).unwrap_err(),
            StateError::DimensionMismatch {
                expected: 2,
                actual: 4
            }
        );
    }

    #[test]
    fn test_rejects_batch_size_mismatch() {
        let state = BatchedState::zero(1, 3).unwrap();
        let m = MatrixBatch::identity(2, 2);
        assert_eq!(
            apply_batch_gate(&state, &m, &[0]).unwrap_err(),
            StateError::BatchSizeMismatch {
                state: 3,
                matrices: 2
            }
        );
    }

    #[test]
    fn test_per_instance_matrices_stay_independent() {
        // Instance 0 gets the identity, instance 1 gets X
        let mut m = MatrixBatch::zeros(2, 2);
        m.set(0, 0, 0, ONE);
        m.set(1, 1, 0, ONE);
        m.set(0, 1, 1, ONE);
        m.set(1, 0, 1, ONE);

        let state = BatchedState::zero(1, 2).unwrap();
        let next = apply_batch_gate(&state, &m, &[0]).unwrap();

        assert_eq!(next.amplitude(0, 0), ONE); // untouched
        assert_eq!(next.amplitude(1, 0), ZERO);
        assert_eq!(next.amplitude(0, 1), ZERO); // flipped
        assert_eq!(next.amplitude(1, 1), ONE);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let state = BatchedState::zero(1, 1).unwrap();
        let mut x = MatrixBatch::zeros(2, 1);
        x.set(0, 1, 0, ONE);
        x.set(1, 0, 0, ONE);
        let _ = apply_batch_gate(&state, &x, &[0]).unwrap();
        assert_eq!(state.amplitude(0, 0), ONE);
        assert_eq!(state.amplitude(1, 0), ZERO);
    }

    #[test]
    fn test_embed_as_controlled_block_structure() {
        let mut m = MatrixBatch::zeros(2, 2);
        for b in 0..2 {
            for r in 0..2 {
                for c in 0..2 {
                    m.set(r, c, b, Complex64::new((r * 2 + c) as f64, b as f64));
                }
            }
        }
        let controlled = embed_as_controlled(&m);
        assert_eq!(controlled.dim(), 4);
        for b in 0..2 {
            // Upper-left block is the identity
            for r in 0..2 {
                for c in 0..2 {
                    let expected = if r == c { ONE } else { ZERO };
                    assert_eq!(controlled.get(r, c, b), expected);
                }
            }
            // Off-diagonal blocks vanish
            for r in 0..2 {
                for c in 0..2 {
                    assert_eq!(controlled.get(r, 2 + c, b), ZERO);
                    assert_eq!(controlled.get(2 + r, c, b), ZERO);
                }
            }
            // Lower-right block is the input
            for r in 0..2 {
                for c in 0..2 {
                    assert_eq!(controlled.get(2 + r, 2 + c, b), m.get(r, c, b));
                }
            }
        }
    }

    #[test]
    fn test_large_batch_parallel_path_matches_sequential() {
        // Enough amplitudes to cross the parallel threshold
        let num_qubits = 10;
        let batch_size = 32;
        let dimension = 1usize << num_qubits;
        let amps: Vec<Complex64> = (0..dimension * batch_size)
            .map(|i| Complex64::new((i % 7) as f64 * 0.1, (i % 3) as f64 * 0.2))
            .collect();
        let state = BatchedState::from_amplitudes(num_qubits, batch_size, &amps).unwrap();

        let mut x = MatrixBatch::zeros(2, batch_size);
        for b in 0..batch_size {
            x.set(0, 1, b, ONE);
            x.set(1, 0, b, ONE);
        }

        let batched = apply_batch_gate(&state, &x, &[4]).unwrap();

        // Compare each instance against a single-instance run
        for b in 0..batch_size {
            let single = BatchedState::from_amplitudes(num_qubits, 1, state.instance(b).unwrap())
                .unwrap();
            let mut xb = MatrixBatch::zeros(2, 1);
            xb.set(0, 1, 0, ONE);
            xb.set(1, 0, 0, ONE);
            let single_out = apply_batch_gate(&single, &xb, &[4]).unwrap();
            assert_eq!(batched.instance(b).unwrap(), single_out.instance(0).unwrap());
        }
    }
}
