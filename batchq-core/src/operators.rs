//! Fixed base-operator matrices and the name-keyed registry
//!
//! Parametrized gates are assembled from a small set of constant 2x2
//! matrices: the identity and the three Pauli operators. They are computed
//! at compile time and shared read-only across every gate object that
//! references them.

use crate::error::CoreError;
use crate::Result;
use num_complex::Complex64;

/// A fixed 2x2 complex matrix in row-major order
pub type Matrix2 = [[Complex64; 2]; 2];

/// A fixed 4x4 complex matrix in row-major order
pub type Matrix4 = [[Complex64; 4]; 4];

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I_UNIT: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// Identity matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X matrix
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I_UNIT, ZERO]];

/// Pauli-Z matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Basis projector |0><0|
pub const PROJ_00: Matrix2 = [[ONE, ZERO], [ZERO, ZERO]];

/// Basis transition |0><1|
pub const PROJ_01: Matrix2 = [[ZERO, ONE], [ZERO, ZERO]];

/// Basis transition |1><0|
pub const PROJ_10: Matrix2 = [[ZERO, ZERO], [ONE, ZERO]];

/// Basis projector |1><1|
pub const PROJ_11: Matrix2 = [[ZERO, ZERO], [ZERO, ONE]];

/// Look up a fixed base operator by name
///
/// Recognized names are "I", "X", "Y" and "Z". The returned reference is
/// `'static`; gate objects capture it once at construction and share it.
///
/// # Errors
/// Returns [`CoreError::UnknownOperator`] for any other name.
///
/// # Example
/// ```
/// use batchq_core::base_operator;
///
/// let z = base_operator("Z").unwrap();
/// assert_eq!(z[1][1].re, -1.0);
/// assert!(base_operator("H").is_err());
/// ```
pub fn base_operator(name: &str) -> Result<&'static Matrix2> {
    match name {
        "I" => Ok(&IDENTITY),
        "X" => Ok(&PAULI_X),
        "Y" => Ok(&PAULI_Y),
        "Z" => Ok(&PAULI_Z),
        _ => Err(CoreError::UnknownOperator {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mult(a: &Matrix2, b: &Matrix2) -> Matrix2 {
        let mut out = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    out[i][j] += a[i][k] * b[k][j];
                }
            }
        }
        out
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(*base_operator("I").unwrap(), IDENTITY);
        assert_eq!(*base_operator("X").unwrap(), PAULI_X);
        assert_eq!(*base_operator("Y").unwrap(), PAULI_Y);
        assert_eq!(*base_operator("Z").unwrap(), PAULI_Z);
    }

    #[test]
    fn test_registry_rejects_unknown_names() {
        for name in ["H", "XX", "", "x"] {
            let err = base_operator(name).unwrap_err();
            assert_eq!(
                err,
                CoreError::UnknownOperator {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_paulis_are_involutory() {
        // P^2 = I is what makes the rotation closed form exact
        for p in [&PAULI_X, &PAULI_Y, &PAULI_Z] {
            let sq = mult(p, p);
            for i in 0..2 {
                for j in 0..2 {
                    assert!((sq[i][j] - IDENTITY[i][j]).norm() < 1e-15);
                }
            }
        }
    }

    #[test]
    fn test_projectors_sum_to_identity() {
        for i in 0..2 {
            for j in 0..2 {
                let sum = PROJ_00[i][j] + PROJ_11[i][j];
                assert!((sum - IDENTITY[i][j]).norm() < 1e-15);
            }
        }
    }
}
