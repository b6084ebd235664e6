//! OneMax fitness evaluation.
//!
//! Fitness is maximized: a genome scores one point per set bit, so the
//! all-ones genome of length `L` is the unique optimum with fitness `L`.

use super::types::{Best, FitnessReport, Genome};
use crate::error::{GaError, Result};

/// Number of set bits in `genome`.
pub fn fitness(genome: &Genome) -> usize {
    genome.count_ones()
}

/// Computes the mean fitness and the fittest individual of `population`.
///
/// Ties for the maximum resolve to the first individual in population order.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `population` has no members.
///
/// ```
/// use u_onemax::ga::{evaluate_fitness, Best, Genome};
///
/// let pop: Vec<Genome> = ["0011", "0111", "1110"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let report = evaluate_fitness(&pop).unwrap();
/// assert!((report.mean - 8.0 / 3.0).abs() < 1e-12);
/// assert_eq!(report.best, Best { index: 1, fitness: 3 });
/// ```
pub fn evaluate_fitness(population: &[Genome]) -> Result<FitnessReport> {
    let mut iter = population.iter().map(fitness).enumerate();
    let (_, first) = iter.next().ok_or(GaError::EmptyPopulation)?;

    let mut best = Best {
        index: 0,
        fitness: first,
    };
    let mut total = first;
    for (index, f) in iter {
        total += f;
        // strict comparison keeps the first occurrence
        if f > best.fitness {
            best = Best { index, fitness: f };
        }
    }

    Ok(FitnessReport {
        mean: total as f64 / population.len() as f64,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn genomes(bits: &[&str]) -> Vec<Genome> {
        bits.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_fitness_counts_ones() {
        assert_eq!(fitness(&"0000".parse().unwrap()), 0);
        assert_eq!(fitness(&"1010".parse().unwrap()), 2);
        assert_eq!(fitness(&Genome::all_ones(10)), 10);
    }

    #[test]
    fn test_empty_population_is_rejected() {
        assert_eq!(evaluate_fitness(&[]), Err(GaError::EmptyPopulation));
    }

    #[test]
    fn test_single_individual() {
        let report = evaluate_fitness(&genomes(&["1101"])).unwrap();
        assert!((report.mean - 3.0).abs() < 1e-12);
        assert_eq!(
            report.best,
            Best {
                index: 0,
                fitness: 3
            }
        );
    }

    #[test]
    fn test_first_occurrence_tie_break() {
        let pop = genomes(&["0001", "0111", "1011", "1110", "0000"]);
        let report = evaluate_fitness(&pop).unwrap();
        assert_eq!(report.best.index, 1);
        assert_eq!(report.best.fitness, 3);
    }

    #[test]
    fn test_all_zero_population() {
        let pop = genomes(&["000", "000"]);
        let report = evaluate_fitness(&pop).unwrap();
        assert_eq!(report.mean, 0.0);
        assert_eq!(
            report.best,
            Best {
                index: 0,
                fitness: 0
            }
        );
    }

    proptest! {
        #[test]
        fn prop_fitness_bounded(bits in vec(any::<bool>(), 0..128)) {
            let g = Genome::from_bits(bits);
            let f = fitness(&g);
            prop_assert!(f <= g.len());
            prop_assert_eq!(f == g.len(), g.is_all_ones());
        }

        #[test]
        fn prop_report_matches_naive(
            pop in vec(vec(any::<bool>(), 8), 1..40)
        ) {
            let pop: Vec<Genome> = pop.into_iter().map(Genome::from_bits).collect();
            let report = evaluate_fitness(&pop).unwrap();

            let scores: Vec<usize> = pop.iter().map(fitness).collect();
            let naive_mean = scores.iter().sum::<usize>() as f64 / scores.len() as f64;
            let max = *scores.iter().max().unwrap();
            let first_max = scores.iter().position(|&s| s == max).unwrap();

            prop_assert!((report.mean - naive_mean).abs() < 1e-9);
            prop_assert!(report.mean >= 0.0 && report.mean <= 8.0);
            prop_assert_eq!(report.best, Best { index: first_max, fitness: max });
        }
    }
}
