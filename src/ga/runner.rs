//! GA evolutionary loop execution.
//!
//! [`Evolution`] is the per-run state machine
//! (`Initialized → Iterating → Terminated`); [`GaRunner`] drives one to
//! completion and reports every generation to an [`Observer`].
//!
//! Each generation keeps exactly one evolving individual: the previous best
//! genome (or, with probability `crossover_rate`, a crossover child of two
//! roulette-selected parents), mutated and appended to a freshly sampled
//! random population of `population_size - 1`.

use super::config::GaConfig;
use super::fitness::evaluate_fitness;
use super::operators::{crossover, mutate};
use super::population::make_population;
use super::selection::select_pair;
use super::types::{FitnessReport, Genome, Population};
use crate::error::Result;
use crate::random::rng_from_option;
use rand::Rng;
use std::fmt;

/// Statistics for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    /// Mean fitness of the population.
    pub mean_fitness: f64,
    /// Fitness of the best individual.
    pub best_fitness: usize,
}

impl GenerationStats {
    fn from_report(generation: usize, report: &FitnessReport) -> Self {
        Self {
            generation,
            mean_fitness: report.mean,
            best_fitness: report.best.fitness,
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {}: average fitness {:.2}, best fitness {:.2}",
            self.generation, self.mean_fitness, self.best_fitness as f64
        )
    }
}

/// Receives progress events from runs and experiments.
///
/// Both methods default to no-ops; `()` is the silent observer.
pub trait Observer {
    /// Called before run `run` (0-based) of an experiment starts.
    fn on_run_start(&mut self, _run: usize) {}

    /// Called for the initial population and after every generation.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

impl Observer for () {}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Initial population built and evaluated; no generation run yet.
    Initialized,
    /// At least one generation has been produced.
    Iterating,
    /// The target was found or the generation cap was reached.
    Terminated,
}

/// Result of a single GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Generation count at termination.
    pub generations: usize,

    /// Whether the all-ones genome was found.
    pub reached_target: bool,

    /// Best genome of the final generation.
    pub best: Genome,

    /// Fitness of `best`.
    pub best_fitness: usize,

    /// Statistics for every generation, starting with generation 0.
    pub history: Vec<GenerationStats>,
}

/// One GA run, advanced a generation at a time.
///
/// ```
/// use u_onemax::ga::{Evolution, GaConfig, RunState};
/// use u_onemax::random::create_rng;
///
/// let config = GaConfig::default();
/// let mut evolution = Evolution::new(&config, create_rng(42)).unwrap();
/// assert_eq!(evolution.state(), RunState::Initialized);
///
/// while evolution.step().unwrap().is_some() {}
/// assert_eq!(evolution.state(), RunState::Terminated);
/// assert!(evolution.generation() <= 30);
/// ```
pub struct Evolution<'c, R: Rng> {
    config: &'c GaConfig,
    rng: R,
    population: Population,
    report: FitnessReport,
    best: Genome,
    generation: usize,
    state: RunState,
    history: Vec<GenerationStats>,
}

impl<'c, R: Rng> Evolution<'c, R> {
    /// Validates `config`, then builds and evaluates the initial population.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] error.
    pub fn new(config: &'c GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population = make_population(config.population_size, config.genome_length, &mut rng);
        let report = evaluate_fitness(&population)?;
        let best = population[report.best.index].clone();

        let history = vec![GenerationStats::from_report(0, &report)];

        Ok(Self {
            config,
            rng,
            population,
            report,
            best,
            generation: 0,
            state: RunState::Initialized,
            history,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of generations produced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best genome of the current population.
    pub fn best(&self) -> &Genome {
        &self.best
    }

    /// The current population.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Fitness statistics of the current population.
    pub fn report(&self) -> &FitnessReport {
        &self.report
    }

    /// Statistics of the most recent generation.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_report(self.generation, &self.report)
    }

    /// Whether the current best genome is the all-ones target.
    pub fn reached_target(&self) -> bool {
        self.best.is_all_ones()
    }

    fn should_terminate(&self) -> bool {
        self.reached_target() || self.generation >= self.config.generation_cap
    }

    /// Produces the next generation.
    ///
    /// Returns `Ok(None)` once the run has terminated, either because the
    /// target was found or the generation cap was reached.
    pub fn step(&mut self) -> Result<Option<GenerationStats>> {
        if self.state == RunState::Terminated {
            return Ok(None);
        }
        if self.should_terminate() {
            self.state = RunState::Terminated;
            return Ok(None);
        }

        self.state = RunState::Iterating;
        self.generation += 1;

        let child = if self.rng.random_bool(self.config.crossover_rate) {
            let (a, b) = select_pair(&self.population, &mut self.rng)?;
            crossover(a, b, &mut self.rng)?
        } else {
            self.best.clone()
        };
        let child = mutate(&child, self.config.mutation_rate, &mut self.rng)?;

        let mut next = make_population(
            self.config.population_size - 1,
            self.config.genome_length,
            &mut self.rng,
        );
        next.push(child);

        self.report = evaluate_fitness(&next)?;
        self.best = next[self.report.best.index].clone();
        self.population = next;

        let stats = self.stats();
        self.history.push(stats);
        log::trace!("{stats}");

        if self.should_terminate() {
            self.state = RunState::Terminated;
        }
        Ok(Some(stats))
    }

    /// Consumes the run and returns its result.
    pub fn into_result(self) -> RunResult {
        RunResult {
            generations: self.generation,
            reached_target: self.best.is_all_ones(),
            best_fitness: self.report.best.fitness,
            best: self.best,
            history: self.history,
        }
    }
}

/// Executes GA runs.
///
/// # Usage
///
/// ```
/// use u_onemax::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config, &mut ()).unwrap();
/// assert!(result.generations <= config.generation_cap);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs one GA to termination, seeding from `config.seed`.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] error.
    pub fn run<O: Observer + ?Sized>(config: &GaConfig, observer: &mut O) -> Result<RunResult> {
        Self::run_with_rng(config, rng_from_option(config.seed), observer)
    }

    /// Runs one GA to termination with the given generator.
    pub fn run_with_rng<R: Rng, O: Observer + ?Sized>(
        config: &GaConfig,
        rng: R,
        observer: &mut O,
    ) -> Result<RunResult> {
        let mut evolution = Evolution::new(config, rng)?;
        observer.on_generation(&evolution.stats());

        while let Some(stats) = evolution.step()? {
            observer.on_generation(&stats);
        }

        let result = evolution.into_result();
        log::debug!(
            "run terminated at generation {} (best fitness {}, target reached: {})",
            result.generations,
            result.best_fitness,
            result.reached_target
        );
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
