//! Fixed gate matrices and scalar closed-form rotations
//!
//! The base operators (I, X, Y, Z) live in `batchq_core::operators`; this
//! module adds the fixed matrices used by the primitive gates and the
//! scalar single-angle rotation forms used as references for the batched
//! builders.

use batchq_core::{Matrix2, Matrix4};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I_UNIT: Complex64 = Complex64::new(0.0, 1.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
/// H = 1/sqrt(2) * [[1,  1],
///                  [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// S gate matrix (sqrt(Z))
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I_UNIT]];

/// T gate matrix (pi/8 gate)
/// T = [[1, 0],
///      [0, e^(i pi/4)]]
pub const T_GATE: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// CNOT gate matrix (control on the first listed qubit)
/// CNOT = [[1, 0, 0, 0],
///         [0, 1, 0, 0],
///         [0, 0, 0, 1],
///         [0, 0, 1, 0]]
pub const CNOT: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// RX matrix for a single angle
///
/// RX(theta) = [[cos(t/2), -i sin(t/2)], [-i sin(t/2), cos(t/2)]]
pub fn rotation_x(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    let cos = Complex64::new(half.cos(), 0.0);
    let nisin = Complex64::new(0.0, -half.sin());
    [[cos, nisin], [nisin, cos]]
}

/// RY matrix for a single angle
///
/// RY(theta) = [[cos(t/2), -sin(t/2)], [sin(t/2), cos(t/2)]]
pub fn rotation_y(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    let cos = Complex64::new(half.cos(), 0.0);
    let sin = Complex64::new(half.sin(), 0.0);
    [[cos, -sin], [sin, cos]]
}

/// RZ matrix for a single angle
///
/// RZ(theta) = [[e^(-i t/2), 0], [0, e^(i t/2)]]
pub fn rotation_z(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    [
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]
}

/// Phase matrix for a single angle
///
/// P(theta) = [[1, 0], [0, e^(i theta)]]
pub fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}
