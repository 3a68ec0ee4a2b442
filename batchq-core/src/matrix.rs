//! Batched complex gate matrices
//!
//! A [`MatrixBatch`] is a complex tensor of logical shape
//! (dim, dim, batch_size): one dim x dim matrix per simulation instance,
//! with the batch axis trailing. Parametrized gate builders produce one,
//! and the batched applicator consumes one.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A batch of square complex matrices with a trailing batch axis
///
/// Storage matches the logical shape: element (row, col, b) lives at
/// `(row * dim + col) * batch_size + b`, so the entries of one matrix
/// position across the batch are contiguous.
///
/// Squareness is guaranteed by construction; every constructor takes a
/// single linear dimension.
///
/// # Example
/// ```
/// use batchq_core::MatrixBatch;
///
/// let m = MatrixBatch::identity(2, 3);
/// assert_eq!(m.dim(), 2);
/// assert_eq!(m.batch_size(), 3);
/// assert_eq!(m.get(0, 0, 2).re, 1.0);
/// assert_eq!(m.get(0, 1, 2).re, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBatch {
    dim: usize,
    batch_size: usize,
    data: Vec<Complex64>,
}

impl MatrixBatch {
    /// Create a batch of zero matrices
    pub fn zeros(dim: usize, batch_size: usize) -> Self {
        Self {
            dim,
            batch_size,
            data: vec![ZERO; dim * dim * batch_size],
        }
    }

    /// Create a batch of identity matrices
    ///
    /// Allocates a fresh buffer on every call; the result is never aliased
    /// with any shared or cached storage, so callers may overwrite entries
    /// freely.
    pub fn identity(dim: usize, batch_size: usize) -> Self {
        let mut out = Self::zeros(dim, batch_size);
        for r in 0..dim {
            let start = (r * dim + r) * batch_size;
            out.data[start..start + batch_size].fill(ONE);
        }
        out
    }

    /// Linear dimension of each matrix
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of matrices in the batch
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Element (row, col) of the matrix for instance `b`
    ///
    /// # Panics
    /// Panics if any index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize, b: usize) -> Complex64 {
        assert!(row < self.dim && col < self.dim && b < self.batch_size);
        self.data[(row * self.dim + col) * self.batch_size + b]
    }

    /// Overwrite element (row, col) of the matrix for instance `b`
    ///
    /// # Panics
    /// Panics if any index is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, b: usize, value: Complex64) {
        assert!(row < self.dim && col < self.dim && b < self.batch_size);
        self.data[(row * self.dim + col) * self.batch_size + b] = value;
    }

    /// Copy the matrix of instance `b` into `out` in row-major order
    ///
    /// Lets hot loops extract one instance into a stack buffer without
    /// allocating.
    ///
    /// # Panics
    /// Panics if `b` is out of range or `out.len() != dim * dim`.
    pub fn instance_into(&self, b: usize, out: &mut [Complex64]) {
        assert!(b < self.batch_size);
        assert_eq!(out.len(), self.dim * self.dim);
        for (pos, slot) in out.iter_mut().enumerate() {
            *slot = self.data[pos * self.batch_size + b];
        }
    }

    /// The matrix of instance `b` as a freshly allocated row-major vector
    pub fn instance(&self, b: usize) -> Vec<Complex64> {
        let mut out = vec![ZERO; self.dim * self.dim];
        self.instance_into(b, &mut out);
        out
    }

    /// Raw storage, shape (dim, dim, batch_size) flattened
    #[inline]
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = MatrixBatch::zeros(4, 5);
        assert_eq!(m.dim(), 4);
        assert_eq!(m.batch_size(), 5);
        assert_eq!(m.data().len(), 80);
        assert!(m.data().iter().all(|v| *v == ZERO));
    }

    #[test]
    fn test_identity_every_instance() {
        let m = MatrixBatch::identity(4, 3);
        for b in 0..3 {
            for r in 0..4 {
                for c in 0..4 {
                    let expected = if r == c { ONE } else { ZERO };
                    assert_eq!(m.get(r, c, b), expected);
                }
            }
        }
    }

    #[test]
    fn test_identity_allocations_are_independent() {
        let mut first = MatrixBatch::identity(4, 2);
        let second = MatrixBatch::identity(4, 2);
        first.set(3, 3, 0, Complex64::new(0.0, 1.0));
        // Mutating one batch never leaks into another
        assert_eq!(second.get(3, 3, 0), ONE);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut m = MatrixBatch::zeros(2, 2);
        let v = Complex64::new(0.25, -0.75);
        m.set(1, 0, 1, v);
        assert_eq!(m.get(1, 0, 1), v);
        assert_eq!(m.get(1, 0, 0), ZERO);
    }

    #[test]
    fn test_instance_extraction() {
        let mut m = MatrixBatch::zeros(2, 3);
        for r in 0..2 {
            for c in 0..2 {
                for b in 0..3 {
                    m.set(r, c, b, Complex64::new((r * 2 + c) as f64, b as f64));
                }
            }
        }
        let inst = m.instance(1);
        assert_eq!(inst.len(), 4);
        for (pos, v) in inst.iter().enumerate() {
            assert_eq!(*v, Complex64::new(pos as f64, 1.0));
        }
    }
}
