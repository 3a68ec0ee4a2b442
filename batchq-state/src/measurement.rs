//! Computational-basis measurement for batched states
//!
//! Provides per-instance outcome probabilities and multi-shot sampling.
//! Sampling draws from the exact amplitude distribution; it never collapses
//! the state, which stays caller-owned and read-only here.

use crate::error::Result;
use crate::state::BatchedState;
use rand::Rng;
use std::collections::HashMap;

/// Counts from repeated computational-basis measurements of one instance
#[derive(Debug, Clone)]
pub struct SamplingResult {
    /// Map from basis-state index to observation count
    pub counts: HashMap<u64, usize>,
    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    /// Observation count for a basis state
    pub fn count(&self, outcome: u64) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Empirical probability of a basis state (count / shots)
    pub fn probability(&self, outcome: u64) -> f64 {
        self.count(outcome) as f64 / self.shots as f64
    }

    /// Outcome as a bitstring, qubit 0 leftmost
    pub fn bitstring(outcome: u64, num_qubits: usize) -> String {
        format!("{:0width$b}", outcome, width = num_qubits)
    }
}

/// Outcome probabilities of instance `b`, indexed by basis state
///
/// # Errors
/// Returns [`crate::StateError::InstanceOutOfRange`] if `b` is out of
/// range.
pub fn probabilities(state: &BatchedState, b: usize) -> Result<Vec<f64>> {
    Ok(state.instance(b)?.iter().map(|a| a.norm_sqr()).collect())
}

/// Draw `shots` computational-basis samples from instance `b`
///
/// Uses inverse-CDF sampling over the exact probabilities. The
/// distribution is normalized by its own total weight, so slightly
/// denormalized states sample sensibly.
///
/// # Errors
/// Returns [`crate::StateError::InstanceOutOfRange`] if `b` is out of
/// range.
pub fn sample<R: Rng + ?Sized>(
    state: &BatchedState,
    b: usize,
    shots: usize,
    rng: &mut R,
) -> Result<SamplingResult> {
    let probs = probabilities(state, b)?;
    let total: f64 = probs.iter().sum();

    let mut counts = HashMap::new();
    for _ in 0..shots {
        let mut draw = rng.gen::<f64>() * total;
        let mut outcome = probs.len() as u64 - 1;
        for (basis, &p) in probs.iter().enumerate() {
            if draw < p {
                outcome = basis as u64;
                break;
            }
            draw -= p;
        }
        *counts.entry(outcome).or_insert(0) += 1;
    }

    Ok(SamplingResult { counts, shots })
}
