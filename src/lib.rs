//! Minimal OneMax genetic algorithm.
//!
//! Evolves 10-bit genomes toward `1111111111` using:
//!
//! - **Roulette selection**: integer fitness-proportionate weights with a
//!   uniform fallback for all-zero populations.
//! - **Single-point crossover**: one child per pair of parents.
//! - **Bit-flip mutation**: independent per-bit flips.
//! - **Single-lineage elitism**: each generation is a fresh random
//!   population plus one evolved copy of the previous best.
//!
//! # Architecture
//!
//! - [`ga`]: data types, operators, the run state machine, and the
//!   experiment runner
//! - [`random`]: seedable generator construction
//! - [`error`]: the shared [`GaError`] type
//!
//! All randomness flows through an explicit `&mut R: Rng`, so any run can be
//! reproduced from its seed.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
