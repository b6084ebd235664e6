//! Variation operators for binary genomes.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point, one child per call
//! - [`crossover_at`]: the same recombination at a caller-chosen point
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-bit flip
//!
//! Both operators borrow their inputs and return a fresh [`Genome`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use super::types::Genome;
use crate::error::{check_probability, GaError, Result};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Chooses a point `p` uniformly in `[0, len - 1)` and returns
/// `parent1[..p]` followed by `parent2[p..]`. For genomes of length 0 or 1
/// the only point is 0, so the child is a copy of `parent2`.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Result<Genome> {
    check_same_length(parent1, parent2)?;
    let n = parent1.len();
    let point = if n < 2 { 0 } else { rng.random_range(0..n - 1) };
    crossover_at(parent1, parent2, point)
}

/// Splices `parent1[..point]` with `parent2[point..]`.
///
/// # Errors
/// - [`GaError::LengthMismatch`] if the parents differ in length
/// - [`GaError::InvalidLength`] if `point` exceeds the genome length
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> Result<Genome> {
    check_same_length(parent1, parent2)?;
    if point > parent1.len() {
        return Err(GaError::InvalidLength {
            name: "crossover point",
            value: point,
        });
    }

    let mut bits = Vec::with_capacity(parent1.len());
    bits.extend_from_slice(&parent1.bits()[..point]);
    bits.extend_from_slice(&parent2.bits()[point..]);
    Ok(Genome::from_bits(bits))
}

fn check_same_length(a: &Genome, b: &Genome) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(GaError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation: each bit flips independently with probability
/// `mutation_rate`.
///
/// A rate of 0 returns an identical genome; a rate of 1 returns the
/// complement.
///
/// # Errors
/// [`GaError::InvalidProbability`] if `mutation_rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(genome: &Genome, mutation_rate: f64, rng: &mut R) -> Result<Genome> {
    check_probability("mutation_rate", mutation_rate)?;
    Ok(genome
        .bits()
        .iter()
        .map(|&bit| bit ^ rng.random_bool(mutation_rate))
        .collect::<Vec<_>>()
        .into())
}

// ============================================================================
// Tests
// ============================================================================
