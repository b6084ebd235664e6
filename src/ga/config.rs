//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run and of an experiment (a batch
//! of independent runs).

use crate::error::{check_positive, check_probability, Result};

/// Configuration for the OneMax GA.
///
/// # Defaults
///
/// ```
/// use u_onemax::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.genome_length, 10);
/// assert_eq!(config.generation_cap, 30);
/// assert_eq!(config.run_count, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_onemax::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_crossover_rate(0.7)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Bits per genome. The target is the all-ones genome of this length.
    pub genome_length: usize,

    /// Probability of producing the elite child by crossover (0.0–1.0).
    ///
    /// Otherwise the previous generation's best genome is carried forward.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to the elite child (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of generations in one run.
    pub generation_cap: usize,

    /// Number of independent runs in an experiment.
    pub run_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            genome_length: 10,
            crossover_rate: 0.0,
            mutation_rate: 0.001,
            generation_cap: 30,
            run_count: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the genome length.
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation cap.
    pub fn with_generation_cap(mut self, n: usize) -> Self {
        self.generation_cap = n;
        self
    }

    /// Sets the number of runs in an experiment.
    pub fn with_run_count(mut self, n: usize) -> Self {
        self.run_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected, never clamped.
    ///
    /// # Errors
    /// - [`GaError::InvalidLength`](crate::GaError::InvalidLength) for a zero
    ///   size, length, cap, or run count
    /// - [`GaError::InvalidProbability`](crate::GaError::InvalidProbability)
    ///   for a rate outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        check_positive("population_size", self.population_size)?;
        check_positive("genome_length", self.genome_length)?;
        check_positive("generation_cap", self.generation_cap)?;
        check_positive("run_count", self.run_count)?;
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}
