//! Batched matrix builders for parametrized gates
//!
//! Pure functions mapping a batch of angles and fixed base matrices to a
//! batch of unitary matrices. Each builder allocates a fresh
//! [`MatrixBatch`] per call; no shared buffer is ever mutated.

use crate::error::{GateError, Result};
use batchq_core::operators::{PROJ_00, PROJ_01, PROJ_10, PROJ_11};
use batchq_core::{Matrix2, MatrixBatch, ParamBatch};
use num_complex::Complex64;

/// Build a batch of single-axis rotation matrices
///
/// For each angle theta the result is the closed form
///
/// ```text
/// R(theta) = cos(theta/2) * I - i sin(theta/2) * P
/// ```
///
/// which is exact whenever P is Hermitian and involutory (P^2 = I), as the
/// Pauli matrices are; it does not generalize to arbitrary P. The batch
/// size is inferred from the length of `theta`; the output has logical
/// shape (2, 2, batch).
pub fn rot_matrices(theta: &[f64], pauli: &Matrix2, identity: &Matrix2) -> MatrixBatch {
    let mut out = MatrixBatch::zeros(2, theta.len());
    for (b, &t) in theta.iter().enumerate() {
        let half = t / 2.0;
        let cos = half.cos();
        let nisin = Complex64::new(0.0, -half.sin());
        for r in 0..2 {
            for c in 0..2 {
                out.set(r, c, b, identity[r][c] * cos + pauli[r][c] * nisin);
            }
        }
    }
    out
}

/// Build a batch of general single-qubit rotation matrices
///
/// U(phi, theta, omega) = RZ(omega) RY(theta) RZ(phi), assembled from the
/// four basis projectors:
///
/// ```text
/// U =  |0><0| cos(theta/2) e^{-i(phi+omega)/2}
///    - |0><1| sin(theta/2) e^{+i(phi-omega)/2}
///    + |1><0| sin(theta/2) e^{-i(phi-omega)/2}
///    + |1><1| cos(theta/2) e^{+i(phi+omega)/2}
/// ```
///
/// The parameter batch must have exactly three rows (phi, theta, omega);
/// use [`ParamBatch::from_values`] to promote a single instance's three
/// angles.
///
/// # Errors
/// Returns [`GateError::ParamCountMismatch`] if the leading axis is not 3.
pub fn u_matrices(params: &ParamBatch) -> Result<MatrixBatch> {
    if params.num_params() != 3 {
        return Err(GateError::ParamCountMismatch {
            gate: "U".to_string(),
            expected: 3,
            actual: params.num_params(),
        });
    }
    let phi = params.row(0);
    let theta = params.row(1);
    let omega = params.row(2);
    let batch_size = params.batch_size();

    let mut out = MatrixBatch::zeros(2, batch_size);
    for b in 0..batch_size {
        let half = theta[b] / 2.0;
        let cos = half.cos();
        let sin = half.sin();
        let t_plus = Complex64::from_polar(1.0, -(phi[b] + omega[b]) / 2.0);
        let t_minus = Complex64::from_polar(1.0, -(phi[b] - omega[b]) / 2.0);

        for r in 0..2 {
            for c in 0..2 {
                let value = PROJ_00[r][c] * cos * t_plus - PROJ_01[r][c] * sin * t_minus.conj()
                    + PROJ_10[r][c] * sin * t_minus
                    + PROJ_11[r][c] * cos * t_plus.conj();
                out.set(r, c, b, value);
            }
        }
    }
    Ok(out)
}

/// Build a batch of controlled-phase matrices
///
/// Each slice is the 4x4 identity with the |11><11| entry replaced by
/// e^{i theta}: the phase applies only when both qubits are |1>. The
/// identity batch is freshly allocated here, so the overwrite can never
/// touch shared storage.
pub fn cphase_matrices(theta: &[f64]) -> MatrixBatch {
    let mut out = MatrixBatch::identity(4, theta.len());
    for (b, &t) in theta.iter().enumerate() {
        out.set(3, 3, b, Complex64::from_polar(1.0, t));
    }
    out
}
