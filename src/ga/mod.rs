//! Genetic Algorithm for the OneMax problem.
//!
//! Evolves fixed-length bit strings toward the all-ones genome. Fitness is
//! the number of set bits (maximized).
//!
//! # Building Blocks
//!
//! - [`random_genome`], [`make_population`]: random initialization
//! - [`fitness`], [`evaluate_fitness`]: scoring and population statistics
//! - [`select_pair`]: fitness-proportionate parent selection
//! - [`operators`]: single-point crossover and bit-flip mutation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm and experiment parameters
//! - [`Evolution`]: Per-run state machine
//! - [`GaRunner`]: Executes one run to termination
//! - [`ExperimentRunner`]: Repeats independent runs and aggregates them
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod experiment;
mod fitness;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use experiment::{ExperimentRunner, ExperimentSummary};
pub use fitness::{evaluate_fitness, fitness};
pub use operators::{crossover, crossover_at, mutate};
pub use population::{make_population, random_genome};
pub use runner::{Evolution, GaRunner, GenerationStats, Observer, RunResult, RunState};
pub use selection::{select_pair, selection_weights};
pub use types::{Best, FitnessReport, Genome, ParseGenomeError, Population};
