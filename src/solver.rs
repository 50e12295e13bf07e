//! Algorithm selection and timed runs.

use crate::brute::{BruteForceConfig, BruteForceSolver, SearchStats};
use crate::color::Coloring;
use crate::error::Result;
use crate::graph::{EdgeThreshold, Graph};
use crate::greedy::greedy_coloring;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Which engine computes the chromatic number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exhaustive search; exact.
    #[default]
    BruteForce,
    /// First-fit greedy; an upper bound.
    Greedy,
}

impl Algorithm {
    /// Returns all available algorithms.
    pub const fn all() -> &'static [Algorithm] {
        &[Algorithm::BruteForce, Algorithm::Greedy]
    }

    /// Whether the result is guaranteed to be the chromatic number.
    pub const fn is_exact(self) -> bool {
        matches!(self, Algorithm::BruteForce)
    }

    /// Runs with the default brute-force configuration.
    ///
    /// # Errors
    /// Propagates the engine's error.
    pub fn run(self, graph: &Graph, threshold: EdgeThreshold) -> Result<Solution> {
        self.run_with(graph, threshold, &BruteForceConfig::default())
    }

    /// Runs the selected engine and measures its wall-clock time.
    ///
    /// `config` only affects [`Algorithm::BruteForce`].
    ///
    /// # Errors
    /// Propagates the engine's error.
    pub fn run_with(
        self,
        graph: &Graph,
        threshold: EdgeThreshold,
        config: &BruteForceConfig,
    ) -> Result<Solution> {
        let start = Instant::now();
        let (coloring, chromatic_number, stats) = match self {
            Algorithm::BruteForce => {
                let outcome = BruteForceSolver::new(config.clone()).solve(graph, threshold)?;
                (outcome.coloring, outcome.chromatic_number, Some(outcome.stats))
            }
            Algorithm::Greedy => {
                let coloring = greedy_coloring(graph, threshold)?;
                let k = coloring.distinct_colors();
                (coloring, k, None)
            }
        };
        let elapsed = start.elapsed();
        log::debug!("{self}: k={chromatic_number} in {elapsed:?}");
        Ok(Solution {
            algorithm: self,
            chromatic_number,
            coloring,
            elapsed,
            stats,
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::BruteForce => f.write_str("brute-force"),
            Algorithm::Greedy => f.write_str("greedy"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "brute-force" | "brute" | "exact" => Ok(Algorithm::BruteForce),
            "greedy" | "heuristic" => Ok(Algorithm::Greedy),
            other => Err(format!("unknown algorithm {other:?} (expected brute-force or greedy)")),
        }
    }
}

/// A chromatic-number result with the coloring that attains it and its timing.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Engine that produced the result.
    pub algorithm: Algorithm,
    /// Number of colors (exact for brute force, an upper bound for greedy).
    pub chromatic_number: usize,
    /// A proper coloring using `chromatic_number` colors.
    pub coloring: Coloring,
    /// Wall-clock time of the engine run.
    pub elapsed: Duration,
    /// Search counters, brute force only.
    pub stats: Option<SearchStats>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_coloring;

    #[test]
    fn both_algorithms_return_proper_colorings() {
        let g = Graph::generate(6, 42).unwrap();
        let th = EdgeThreshold::new(30).unwrap();
        for &algo in Algorithm::all() {
            let sol = algo.run(&g, th).unwrap();
            assert_eq!(sol.algorithm, algo);
            assert_eq!(sol.coloring.distinct_colors(), sol.chromatic_number);
            validate_coloring(&g, th, &sol.coloring).unwrap();
            assert_eq!(sol.stats.is_some(), algo.is_exact());
        }
    }

    #[test]
    fn greedy_never_beats_brute_force() {
        for seed in 0..20 {
            let g = Graph::generate(7, seed).unwrap();
            let th = EdgeThreshold::new(40).unwrap();
            let exact = Algorithm::BruteForce.run(&g, th).unwrap().chromatic_number;
            let upper = Algorithm::Greedy.run(&g, th).unwrap().chromatic_number;
            assert!(upper >= exact, "seed={seed}: greedy {upper} < exact {exact}");
        }
    }

    #[test]
    fn algorithm_names_round_trip() {
        for &algo in Algorithm::all() {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
        assert!("annealing".parse::<Algorithm>().is_err());
    }
}
