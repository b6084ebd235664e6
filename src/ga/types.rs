//! Core data types: [`Genome`], [`Population`], and fitness summaries.

use std::fmt;
use std::str::FromStr;

/// A fixed-length binary candidate solution.
///
/// Genomes are never modified in place by the GA operators; crossover and
/// mutation always build a new value.
///
/// ```
/// use u_onemax::ga::Genome;
///
/// let g: Genome = "1101".parse().unwrap();
/// assert_eq!(g.len(), 4);
/// assert_eq!(g.to_string(), "1101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome(Vec<bool>);

impl Genome {
    /// Wraps a bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// The all-ones genome of the given length (the OneMax optimum).
    pub fn all_ones(length: usize) -> Self {
        Self(vec![true; length])
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying bits.
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Returns `true` if every bit is set.
    ///
    /// An empty genome is trivially all-ones.
    pub fn is_all_ones(&self) -> bool {
        self.0.iter().all(|&b| b)
    }

    /// Bitwise complement.
    pub fn complement(&self) -> Self {
        Self(self.0.iter().map(|&b| !b).collect())
    }

    /// Consumes the genome, returning its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.0
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Genome`] from a string containing
/// characters other than `0` and `1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit {found:?} at position {position}")]
pub struct ParseGenomeError {
    pub position: usize,
    pub found: char,
}

impl FromStr for Genome {
    type Err = ParseGenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseGenomeError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Genome)
    }
}

/// The genomes alive in one generation.
///
/// Order carries no meaning beyond identifying an individual by index within
/// its generation.
pub type Population = Vec<Genome>;

/// The fittest individual of a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Best {
    /// Position of the individual in the population.
    pub index: usize,
    /// Its fitness (number of set bits).
    pub fitness: usize,
}

/// Fitness statistics for one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessReport {
    /// Arithmetic mean fitness.
    pub mean: f64,
    /// First individual (in population order) with maximal fitness.
    pub best: Best,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let g: Genome = "0110".parse().unwrap();
        assert_eq!(g.bits(), &[false, true, true, false]);
        assert_eq!(g.to_string(), "0110");
        assert_eq!(g.into_bits(), vec![false, true, true, false]);
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        let err = "01a1".parse::<Genome>().unwrap_err();
        assert_eq!(
            err,
            ParseGenomeError {
                position: 2,
                found: 'a'
            }
        );
    }

    #[test]
    fn test_all_ones_and_complement() {
        let ones = Genome::all_ones(5);
        assert!(ones.is_all_ones());
        assert_eq!(ones.count_ones(), 5);

        let zeros = ones.complement();
        assert_eq!(zeros.count_ones(), 0);
        assert!(!zeros.is_all_ones());
        assert_eq!(zeros.complement(), ones);
    }

    #[test]
    fn test_empty_genome() {
        let g = Genome::default();
        assert!(g.is_empty());
        assert_eq!(g.count_ones(), 0);
        assert_eq!(g.to_string(), "");
    }
}
