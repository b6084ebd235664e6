//! Repeated independent runs and their aggregate statistics.

use super::config::GaConfig;
use super::runner::{GaRunner, Observer};
use crate::error::Result;
use crate::random::{create_rng, rng_from_option};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Aggregate result of an experiment.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    /// Terminal generation count of every run, in run order.
    pub generations: Vec<usize>,

    /// Number of runs that found the all-ones genome.
    pub successes: usize,

    /// Total wall-clock time of all runs.
    pub elapsed: Duration,

    /// Whether the experiment was cancelled before `run_count` runs.
    pub cancelled: bool,
}

impl ExperimentSummary {
    /// Number of runs performed.
    pub fn runs(&self) -> usize {
        self.generations.len()
    }

    /// Mean terminal generation count; 0 for an empty experiment.
    pub fn mean_generations(&self) -> f64 {
        if self.generations.is_empty() {
            return 0.0;
        }
        self.generations.iter().sum::<usize>() as f64 / self.generations.len() as f64
    }

    /// Fraction of runs that found the target.
    pub fn success_rate(&self) -> f64 {
        if self.generations.is_empty() {
            return 0.0;
        }
        self.successes as f64 / self.generations.len() as f64
    }
}

/// Executes `run_count` independent GA runs.
///
/// Each run gets a fresh population and its own generator, seeded from the
/// experiment generator, so a seeded experiment is reproducible as a whole.
///
/// ```
/// use u_onemax::ga::{ExperimentRunner, GaConfig};
///
/// let config = GaConfig::default().with_run_count(20).with_seed(1);
/// let summary = ExperimentRunner::run(&config, &mut ()).unwrap();
/// assert_eq!(summary.runs(), 20);
/// assert!(summary.mean_generations() <= 30.0);
/// ```
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the experiment.
    ///
    /// # Errors
    /// Any [`GaConfig::validate`] error, reported before the first run.
    pub fn run<O: Observer + ?Sized>(
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<ExperimentSummary> {
        Self::run_with_cancel(config, observer, None)
    }

    /// Runs the experiment with an optional cancellation token.
    ///
    /// The flag is checked before each run; once it is set, the runs
    /// completed so far are summarized.
    pub fn run_with_cancel<O: Observer + ?Sized>(
        config: &GaConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExperimentSummary> {
        config.validate()?;

        let mut master = rng_from_option(config.seed);
        let mut generations = Vec::new();
        let mut successes = 0;
        let mut cancelled = false;
        let start = Instant::now();

        for run in 0..config.run_count {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            observer.on_run_start(run);
            let rng = create_rng(master.random());
            let result = GaRunner::run_with_rng(config, rng, &mut *observer)?;
            if result.reached_target {
                successes += 1;
            }
            generations.push(result.generations);
        }

        let summary = ExperimentSummary {
            generations,
            successes,
            elapsed: start.elapsed(),
            cancelled,
        };
        log::info!(
            "{} runs finished in {:.3}s: mean generations {:.2}, {} reached the target",
            summary.runs(),
            summary.elapsed.as_secs_f64(),
            summary.mean_generations(),
            summary.successes
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::ga::GenerationStats;

    #[derive(Default)]
    struct Counter {
        runs: Vec<usize>,
        generations: usize,
    }

    impl Observer for Counter {
        fn on_run_start(&mut self, run: usize) {
            self.runs.push(run);
        }

        fn on_generation(&mut self, _stats: &GenerationStats) {
            self.generations += 1;
        }
    }

    #[test]
    fn test_runs_counted() {
        let config = GaConfig::default().with_run_count(25).with_seed(42);
        let mut counter = Counter::default();
        let summary = ExperimentRunner::run(&config, &mut counter).unwrap();

        assert_eq!(summary.runs(), 25);
        assert_eq!(counter.runs, (0..25).collect::<Vec<_>>());
        // one initial report per run plus one per generation
        let expected: usize = summary.generations.iter().map(|g| g + 1).sum();
        assert_eq!(counter.generations, expected);
        assert!(summary.generations.iter().all(|&g| g <= 30));
    }

    #[test]
    fn test_mean_generations() {
        let summary = ExperimentSummary {
            generations: vec![2, 4, 9],
            successes: 2,
            elapsed: Duration::ZERO,
            cancelled: false,
        };
        assert!((summary.mean_generations() - 5.0).abs() < 1e-12);
        assert!((summary.success_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExperimentSummary {
            generations: vec![],
            successes: 0,
            elapsed: Duration::ZERO,
            cancelled: false,
        };
        assert_eq!(summary.mean_generations(), 0.0);
        assert_eq!(summary.success_rate(), 0.0);
    }

    #[test]
    fn test_seeded_experiment_reproducible() {
        let config = GaConfig::default().with_run_count(10).with_seed(7);
        let a = ExperimentRunner::run(&config, &mut ()).unwrap();
        let b = ExperimentRunner::run(&config, &mut ()).unwrap();
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.successes, b.successes);
    }

    #[test]
    fn test_runs_are_independent() {
        let config = GaConfig::default().with_run_count(40).with_seed(3);
        let summary = ExperimentRunner::run(&config, &mut ()).unwrap();
        let first = summary.generations[0];
        assert!(
            summary.generations.iter().any(|&g| g != first),
            "independent runs should not all terminate identically: {:?}",
            summary.generations
        );
    }

    /// Raises the cancellation flag once `limit` runs have started.
    struct StopAfter {
        limit: usize,
        started: usize,
        flag: Arc<AtomicBool>,
    }

    impl Observer for StopAfter {
        fn on_run_start(&mut self, _run: usize) {
            self.started += 1;
            if self.started >= self.limit {
                self.flag.store(true, Ordering::Relaxed);
            }
        }
    }

    #[test]
    fn test_unbounded_run_count_cancelled() {
        let config = GaConfig::default().with_run_count(usize::MAX).with_seed(42);
        let flag = Arc::new(AtomicBool::new(false));
        let mut observer = StopAfter {
            limit: 3,
            started: 0,
            flag: flag.clone(),
        };

        let summary = ExperimentRunner::run_with_cancel(&config, &mut observer, Some(flag)).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.runs(), 3);
        assert_eq!(observer.started, 3);
    }

    #[test]
    fn test_uncancelled_summary() {
        let config = GaConfig::default().with_run_count(4).with_seed(1);
        let flag = Arc::new(AtomicBool::new(false));
        let summary = ExperimentRunner::run_with_cancel(&config, &mut (), Some(flag)).unwrap();
        assert!(!summary.cancelled);
        assert_eq!(summary.runs(), 4);
    }

    #[test]
    fn test_invalid_config_runs_nothing() {
        let config = GaConfig::default().with_run_count(0);
        let mut counter = Counter::default();
        assert!(matches!(
            ExperimentRunner::run(&config, &mut counter),
            Err(GaError::InvalidLength {
                name: "run_count",
                ..
            })
        ));
        assert!(counter.runs.is_empty());
    }
}
