//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Each individual receives an integer weight
//! `round((fitness / mean) / n * 100)`, so an individual of average fitness
//! contributes roughly `100 / n`. Parents are drawn with replacement from the
//! cumulative distribution over these weights.
//!
//! # Degenerate populations
//!
//! When the mean fitness is zero the ratio is undefined, and when every
//! rounded weight is zero the wheel has no area. Both cases fall back to
//! uniform weights of 1 instead of failing.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::fitness::{evaluate_fitness, fitness};
use super::types::Genome;
use crate::error::{GaError, Result};
use rand::Rng;

/// Selection weights for every individual of `population`.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `population` is empty.
pub fn selection_weights(population: &[Genome]) -> Result<Vec<u32>> {
    let report = evaluate_fitness(population)?;
    let n = population.len() as f64;

    if report.mean == 0.0 {
        return Ok(vec![1; population.len()]);
    }

    let weights: Vec<u32> = population
        .iter()
        .map(|g| ((fitness(g) as f64 / report.mean) / n * 100.0).round() as u32)
        .collect();

    if weights.iter().all(|&w| w == 0) {
        return Ok(vec![1; population.len()]);
    }
    Ok(weights)
}

/// Draws two parents with replacement; the same individual may be drawn
/// twice.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `population` is empty.
pub fn select_pair<'a, R: Rng>(
    population: &'a [Genome],
    rng: &mut R,
) -> Result<(&'a Genome, &'a Genome)> {
    let weights = selection_weights(population)?;
    let cumulative = cumulative_weights(&weights);

    let first = sample_index(&cumulative, rng);
    let second = sample_index(&cumulative, rng);
    Ok((&population[first], &population[second]))
}

/// Running totals of `weights`; the last entry is the total weight.
fn cumulative_weights(weights: &[u32]) -> Vec<u64> {
    weights
        .iter()
        .scan(0u64, |acc, &w| {
            *acc += u64::from(w);
            Some(*acc)
        })
        .collect()
}

/// Picks an index with probability proportional to its weight.
///
/// `cumulative` must be non-empty with a positive total.
fn sample_index<R: Rng>(cumulative: &[u64], rng: &mut R) -> usize {
    let total = cumulative[cumulative.len() - 1];
    let threshold = rng.random_range(0..total);
    // first slot whose running total exceeds the threshold
    cumulative.partition_point(|&c| c <= threshold)
}
