//! Seedable random number generation.
//!
//! Every stochastic operation in this crate takes an explicit `&mut R: Rng`.
//! [`create_rng`] is the single place where generators are constructed, so a
//! seed fully determines a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
