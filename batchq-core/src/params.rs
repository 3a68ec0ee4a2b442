//! Batched gate parameters
//!
//! A [`ParamBatch`] carries the real-valued angles for a parametrized gate
//! across a batch of independent simulation instances. Its logical shape is
//! (n_params, batch_size): one row per parameter, one column per instance.
//!
//! The shape coercion of loosely-typed tensor frontends (a rank-1 sequence
//! of length B versus a rank-2 (1, B) array) is formalized here as explicit
//! constructors: both spellings produce the same single-row batch, so
//! downstream code never squeezes axes ad hoc.

use crate::error::CoreError;
use crate::Result;

/// A batch of real gate parameters with logical shape (n_params, batch_size)
///
/// Stored row-major: row p holds parameter p for every instance, so a
/// single-parameter gate reads one contiguous slice of angles.
///
/// # Example
/// ```
/// use batchq_core::ParamBatch;
///
/// // One parameter, four instances: shape (1, 4)
/// let thetas = ParamBatch::from_row(&[0.1, 0.2, 0.3, 0.4]);
/// assert_eq!(thetas.num_params(), 1);
/// assert_eq!(thetas.batch_size(), 4);
///
/// // Three parameters (phi, theta, omega), one instance: shape (3, 1)
/// let angles = ParamBatch::from_values(&[0.5, 1.0, 1.5]);
/// assert_eq!(angles.num_params(), 3);
/// assert_eq!(angles.batch_size(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBatch {
    num_params: usize,
    batch_size: usize,
    data: Vec<f64>,
}

impl ParamBatch {
    /// Create a parameter batch with an explicit shape
    ///
    /// `data` is row-major: `data[p * batch_size + b]` is parameter `p` of
    /// instance `b`.
    ///
    /// # Errors
    /// Returns [`CoreError::ShapeMismatch`] if `data.len()` does not equal
    /// `num_params * batch_size`.
    pub fn new(num_params: usize, batch_size: usize, data: Vec<f64>) -> Result<Self> {
        let expected = num_params * batch_size;
        if data.len() != expected {
            return Err(CoreError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            num_params,
            batch_size,
            data,
        })
    }

    /// Create a single-row batch from a sequence of angles
    ///
    /// Accepts what a tensor frontend would call either a rank-1 sequence
    /// of length B or a rank-2 (1, B) array; both normalize to shape (1, B).
    pub fn from_row(values: &[f64]) -> Self {
        Self {
            num_params: 1,
            batch_size: values.len(),
            data: values.to_vec(),
        }
    }

    /// Create a single-instance batch from one value per parameter
    ///
    /// A rank-1 input of length P is promoted to shape (P, 1).
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            num_params: values.len(),
            batch_size: 1,
            data: values.to_vec(),
        }
    }

    /// Number of parameters (the leading logical axis)
    #[inline]
    pub fn num_params(&self) -> usize {
        self.num_params
    }

    /// Number of simulation instances (the trailing logical axis)
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// All values of parameter `p`, one per instance
    ///
    /// # Panics
    /// Panics if `p >= num_params`.
    #[inline]
    pub fn row(&self, p: usize) -> &[f64] {
        let start = p * self.batch_size;
        &self.data[start..start + self.batch_size]
    }

    /// Parameter `p` of instance `b`
    ///
    /// # Panics
    /// Panics if `p` or `b` is out of range.
    #[inline]
    pub fn value(&self, p: usize, b: usize) -> f64 {
        assert!(b < self.batch_size);
        self.data[p * self.batch_size + b]
    }

    /// Extract the parameters of a single instance, in parameter order
    pub fn instance(&self, b: usize) -> Vec<f64> {
        assert!(b < self.batch_size);
        (0..self.num_params).map(|p| self.value(p, b)).collect()
    }
}
