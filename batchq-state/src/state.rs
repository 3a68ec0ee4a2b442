//! Batched statevector representation
//!
//! A [`BatchedState`] holds the amplitudes of `batch_size` independent
//! n-qubit registers. The logical shape is (2, 2, ..., 2, batch_size): one
//! axis per qubit plus a trailing batch axis, with qubit 0 as the most
//! significant bit of the basis index. Storage is batch-major so the 2^n
//! amplitudes of one instance form a contiguous slice; that keeps the
//! per-instance kernels cache-friendly and makes the batch trivially
//! splittable for data-parallel application.

use crate::error::{Result, StateError};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Maximum register size for a dense representation
const MAX_QUBITS: usize = 30;

/// A batch of pure quantum states over the same qubit register
///
/// # Example
/// ```
/// use batchq_state::BatchedState;
///
/// let state = BatchedState::zero(2, 3).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.batch_size(), 3);
/// assert_eq!(state.amplitude(0, 1).re, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchedState {
    num_qubits: usize,
    dimension: usize,
    batch_size: usize,
    data: Vec<Complex64>,
}

impl BatchedState {
    /// Create a batch of states initialized to |0...0>
    ///
    /// # Errors
    /// Returns [`StateError::InvalidDimension`] for registers above 30
    /// qubits and [`StateError::EmptyBatch`] for a zero batch size.
    pub fn zero(num_qubits: usize, batch_size: usize) -> Result<Self> {
        let mut state = Self::null(num_qubits, batch_size)?;
        for b in 0..batch_size {
            state.data[b * state.dimension] = ONE;
        }
        Ok(state)
    }

    /// Create a batch of uniform superposition states
    ///
    /// Every instance is H^{(x)n}|0...0>: all 2^n amplitudes equal to
    /// 1/sqrt(2^n).
    pub fn uniform(num_qubits: usize, batch_size: usize) -> Result<Self> {
        let mut state = Self::null(num_qubits, batch_size)?;
        let amp = Complex64::new(1.0 / (state.dimension as f64).sqrt(), 0.0);
        state.data.fill(amp);
        Ok(state)
    }

    /// Create a batch from raw amplitudes
    ///
    /// `amplitudes` is batch-major: the 2^n amplitudes of instance 0,
    /// followed by those of instance 1, and so on.
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] if the data length is not
    /// `2^num_qubits * batch_size`.
    pub fn from_amplitudes(
        num_qubits: usize,
        batch_size: usize,
        amplitudes: &[Complex64],
    ) -> Result<Self> {
        let mut state = Self::null(num_qubits, batch_size)?;
        let expected = state.dimension * batch_size;
        if amplitudes.len() != expected {
            return Err(StateError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }
        state.data.copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Broadcast a single instance's amplitudes across a batch
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] if `instance.len()` is not
    /// `2^num_qubits`.
    pub fn broadcast(num_qubits: usize, batch_size: usize, instance: &[Complex64]) -> Result<Self> {
        let mut state = Self::null(num_qubits, batch_size)?;
        if instance.len() != state.dimension {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension,
                actual: instance.len(),
            });
        }
        for b in 0..batch_size {
            let start = b * state.dimension;
            state.data[start..start + state.dimension].copy_from_slice(instance);
        }
        Ok(state)
    }

    /// All-zero amplitude buffer with validated shape
    fn null(num_qubits: usize, batch_size: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                dimension: 1usize << num_qubits.min(usize::BITS as usize - 1),
            });
        }
        if batch_size == 0 {
            return Err(StateError::EmptyBatch);
        }
        let dimension = 1usize << num_qubits;
        Ok(Self {
            num_qubits,
            dimension,
            batch_size,
            data: vec![ZERO; dimension * batch_size],
        })
    }

    /// Wrap an already-shaped amplitude buffer
    ///
    /// The caller guarantees `data.len() == (1 << num_qubits) * batch_size`.
    pub(crate) fn from_raw(num_qubits: usize, batch_size: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), (1usize << num_qubits) * batch_size);
        Self {
            num_qubits,
            dimension: 1usize << num_qubits,
            batch_size,
            data,
        }
    }

    /// Number of qubits in the register
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes per instance (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of independent simulation instances
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Amplitude of `basis` for instance `b`
    ///
    /// Basis indices order qubit 0 as the most significant bit: for two
    /// qubits, index 2 is |10> (qubit 0 set, qubit 1 clear).
    ///
    /// # Panics
    /// Panics if `basis` or `b` is out of range.
    #[inline]
    pub fn amplitude(&self, basis: usize, b: usize) -> Complex64 {
        assert!(basis < self.dimension && b < self.batch_size);
        self.data[b * self.dimension + basis]
    }

    /// The contiguous amplitude slice of instance `b`
    ///
    /// # Errors
    /// Returns [`StateError::InstanceOutOfRange`] if `b >= batch_size`.
    pub fn instance(&self, b: usize) -> Result<&[Complex64]> {
        if b >= self.batch_size {
            return Err(StateError::InstanceOutOfRange {
                index: b,
                batch_size: self.batch_size,
            });
        }
        let start = b * self.dimension;
        Ok(&self.data[start..start + self.dimension])
    }

    /// Raw batch-major amplitude storage
    #[inline]
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// L2 norm of instance `b`
    pub fn norm(&self, b: usize) -> Result<f64> {
        let amps = self.instance(b)?;
        Ok(amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt())
    }

    /// Check that instance `b` has unit norm within `epsilon`
    pub fn is_normalized(&self, b: usize, epsilon: f64) -> Result<bool> {
        Ok((self.norm(b)? - 1.0).abs() < epsilon)
    }

    /// Normalize every instance to unit norm
    ///
    /// Instances with vanishing norm are left untouched.
    pub fn normalize(&mut self) {
        for b in 0..self.batch_size {
            let start = b * self.dimension;
            let slice = &mut self.data[start..start + self.dimension];
            let norm = slice.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
            if norm > 1e-12 {
                let inv = 1.0 / norm;
                for a in slice {
                    *a *= inv;
                }
            }
        }
    }
}
