//! Scalar gate-application kernels for a single simulation instance
//!
//! Each kernel contracts one small row-major matrix against the qubit axes
//! of one instance's amplitude slice, writing into a separate destination
//! slice. Every destination amplitude is written exactly once, so callers
//! may pass an uninitialized (zeroed) buffer.
//!
//! Qubit `q` of an n-qubit register addresses bit `n - 1 - q` of the basis
//! index (qubit 0 is the most significant bit). For multi-qubit gates the
//! composite matrix index orders the qubit list the same way: the first
//! listed qubit selects the high bit of the matrix row.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Apply a 2x2 matrix to one qubit of a single instance
///
/// Pairs up basis states that differ only in the target qubit's bit and
/// applies the matrix to each pair.
pub fn apply_single_qubit(
    src: &[Complex64],
    dst: &mut [Complex64],
    m: &[Complex64; 4],
    qubit: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let mask = 1usize << (num_qubits - 1 - qubit);

    let m00 = m[0];
    let m01 = m[1];
    let m10 = m[2];
    let m11 = m[3];

    for i in 0..dimension {
        // Process each pair once, from its low member
        if i & mask != 0 {
            continue;
        }
        let j = i | mask;

        let a0 = src[i];
        let a1 = src[j];

        dst[i] = m00 * a0 + m01 * a1;
        dst[j] = m10 * a0 + m11 * a1;
    }
}

/// Apply a 4x4 matrix to an ordered pair of qubits of a single instance
///
/// The matrix row index is `bit(qubit_a) * 2 + bit(qubit_b)`, so a
/// controlled operation in block form [[I, 0], [0, U]] takes
/// (control, target) qubit order directly.
pub fn apply_two_qubit(
    src: &[Complex64],
    dst: &mut [Complex64],
    m: &[Complex64; 16],
    qubit_a: usize,
    qubit_b: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let mask_a = 1usize << (num_qubits - 1 - qubit_a);
    let mask_b = 1usize << (num_qubits - 1 - qubit_b);
    let both = mask_a | mask_b;

    for base in 0..dimension {
        if base & both != 0 {
            continue;
        }
        let i00 = base;
        let i01 = base | mask_b;
        let i10 = base | mask_a;
        let i11 = base | both;

        let a00 = src[i00];
        let a01 = src[i01];
        let a10 = src[i10];
        let a11 = src[i11];

        dst[i00] = m[0] * a00 + m[1] * a01 + m[2] * a10 + m[3] * a11;
        dst[i01] = m[4] * a00 + m[5] * a01 + m[6] * a10 + m[7] * a11;
        dst[i10] = m[8] * a00 + m[9] * a01 + m[10] * a10 + m[11] * a11;
        dst[i11] = m[12] * a00 + m[13] * a01 + m[14] * a10 + m[15] * a11;
    }
}

/// Apply a 2^k x 2^k matrix to an ordered list of k qubits
///
/// Generic scatter/gather fallback for gates beyond two qubits. Enumerates
/// base indices with all target bits clear, then gathers the 2^k touched
/// amplitudes through a precomputed offset table.
pub fn apply_k_qubit(
    src: &[Complex64],
    dst: &mut [Complex64],
    m: &[Complex64],
    qubits: &[usize],
    num_qubits: usize,
) {
    let k = qubits.len();
    let dim = 1usize << k;
    debug_assert_eq!(m.len(), dim * dim);

    let masks: Vec<usize> = qubits
        .iter()
        .map(|&q| 1usize << (num_qubits - 1 - q))
        .collect();
    let all: usize = masks.iter().fold(0, |acc, &mk| acc | mk);

    // offsets[c] scatters composite index c onto the basis-index bits
    let mut offsets = vec![0usize; dim];
    for (c, offset) in offsets.iter_mut().enumerate() {
        for (j, &mk) in masks.iter().enumerate() {
            if c >> (k - 1 - j) & 1 == 1 {
                *offset |= mk;
            }
        }
    }

    let dimension = 1usize << num_qubits;
    for base in 0..dimension {
        if base & all != 0 {
            continue;
        }
        for r in 0..dim {
            let mut acc = ZERO;
            for c in 0..dim {
                acc += m[r * dim + c] * src[base + offsets[c]];
            }
            dst[base + offsets[r]] = acc;
        }
    }
}
