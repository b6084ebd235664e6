//! Random genome and population construction.

use super::types::{Genome, Population};
use rand::Rng;

/// Returns a genome whose bits are drawn independently and uniformly.
///
/// A `length` of 0 yields an empty genome.
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    Genome::from_bits((0..length).map(|_| rng.random_bool(0.5)).collect())
}

/// Returns `size` independent random genomes of the given length.
pub fn make_population<R: Rng>(size: usize, length: usize, rng: &mut R) -> Population {
    (0..size).map(|_| random_genome(length, rng)).collect()
}
