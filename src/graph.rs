//! Seeded random graphs stored as symmetric weight matrices.
//!
//! A [`Graph`] holds one weight in `[0, 100)` per vertex pair. Edges are not fixed at
//! construction: an edge `{i, j}` exists at a given [`EdgeThreshold`] iff
//! `weight(i, j) > threshold`, so one matrix answers queries at every threshold.

use crate::error::{ColoringError, Result};
use crate::rng::{PrngKind, WeightSource, MAX_WEIGHT};
use std::fmt;

// ============================================================================
// EdgeThreshold
// ============================================================================

/// Cutoff above which a weight means "edge present". Always in `[0, 100)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeThreshold(u8);

impl EdgeThreshold {
    /// No weight exceeds this threshold: the graph has no edges.
    pub const NONE: EdgeThreshold = EdgeThreshold(MAX_WEIGHT - 1);

    /// Validates a raw threshold.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `value` is outside `[0, 100)`.
    pub fn new(value: i64) -> Result<Self> {
        if (0..i64::from(MAX_WEIGHT)).contains(&value) {
            Ok(EdgeThreshold(value as u8))
        } else {
            Err(ColoringError::InvalidArgument(format!(
                "edge threshold {value} outside [0, {MAX_WEIGHT})"
            )))
        }
    }

    /// The raw value.
    #[inline(always)]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns whether a weight counts as an edge.
    #[inline(always)]
    pub fn admits(self, weight: u8) -> bool {
        weight > self.0
    }
}

impl fmt::Display for EdgeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Graph
// ============================================================================

/// An undirected graph on `n` vertices given by a symmetric weight matrix.
///
/// Invariants (checked in debug builds):
/// - `weight(i, j) == weight(j, i)`;
/// - `weight(i, i) == 0`;
/// - every weight is `< 100`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    /// Row-major `n * n` matrix.
    weights: Vec<u8>,
}

impl Graph {
    /// Generates a graph with the default [`PrngKind::XorShift`] generator.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `vertex_count < 1`.
    pub fn generate(vertex_count: usize, seed: i64) -> Result<Self> {
        Self::generate_with(vertex_count, seed, PrngKind::default())
    }

    /// Generates a graph from `seed` using the chosen generator.
    ///
    /// Exactly `n(n-1)/2` weights are drawn and written to the upper triangle in row-major
    /// order (row `i` ascending, columns `i+1..n`), then mirrored.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `vertex_count < 1`.
    pub fn generate_with(vertex_count: usize, seed: i64, prng: PrngKind) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        let mut source = prng.source(seed);
        let graph = Self::from_source(vertex_count, source.as_mut());
        log::debug!(
            "generated graph: n={vertex_count} seed={seed} prng={prng} pairs={}",
            pair_count(vertex_count)
        );
        Ok(graph)
    }

    /// Fills the upper triangle from `source`.
    fn from_source(n: usize, source: &mut dyn WeightSource) -> Self {
        let mut graph = Self::filled(n, 0);
        for i in 0..n {
            for j in (i + 1)..n {
                graph.set_weight(i, j, source.next_weight());
            }
        }
        graph.debug_check_invariants();
        graph
    }

    /// Graph whose off-diagonal weights all equal `w`.
    fn filled(n: usize, w: u8) -> Self {
        debug_assert!(w < MAX_WEIGHT);
        let mut weights = vec![w; n * n];
        for i in 0..n {
            weights[i * n + i] = 0;
        }
        Self { n, weights }
    }

    /// Graph with no edges at any threshold.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `vertex_count < 1`.
    pub fn empty(vertex_count: usize) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(Self::filled(vertex_count, 0))
    }

    /// Graph whose every pair is an edge at any threshold below 99.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `vertex_count < 1`.
    pub fn complete(vertex_count: usize) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(Self::filled(vertex_count, MAX_WEIGHT - 1))
    }

    /// Complete bipartite graph `K_{a,b}`: vertices `0..a` on one side, `a..a+b` on the other.
    ///
    /// # Errors
    /// Returns [`ColoringError::InvalidArgument`] if `a + b < 1`.
    pub fn complete_bipartite(a: usize, b: usize) -> Result<Self> {
        let n = a + b;
        check_vertex_count(n)?;
        let mut graph = Self::filled(n, 0);
        for i in 0..a {
            for j in a..n {
                graph.set_weight(i, j, MAX_WEIGHT - 1);
            }
        }
        graph.debug_check_invariants();
        Ok(graph)
    }

    #[inline]
    fn set_weight(&mut self, i: usize, j: usize, w: u8) {
        debug_assert!(i != j);
        self.weights[i * self.n + j] = w;
        self.weights[j * self.n + i] = w;
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Weight of the pair `(i, j)`.
    #[inline(always)]
    pub fn weight(&self, i: usize, j: usize) -> u8 {
        debug_assert!(i < self.n && j < self.n);
        self.weights[i * self.n + j]
    }

    /// Returns whether `{i, j}` is an edge at `threshold`.
    #[inline(always)]
    pub fn has_edge(&self, i: usize, j: usize, threshold: EdgeThreshold) -> bool {
        threshold.admits(self.weight(i, j))
    }

    /// Neighbors of `v` at `threshold`, in increasing order.
    pub fn neighbors(&self, v: usize, threshold: EdgeThreshold) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&w| self.has_edge(v, w, threshold))
    }

    /// Degree of `v` at `threshold`.
    pub fn degree(&self, v: usize, threshold: EdgeThreshold) -> usize {
        self.neighbors(v, threshold).count()
    }

    /// Number of edges at `threshold`.
    pub fn edge_count(&self, threshold: EdgeThreshold) -> usize {
        let mut count = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.has_edge(i, j, threshold) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Neighbor bitsets at `threshold`: bit `j` of entry `i` is set iff `{i, j}` is an edge.
    ///
    /// Only defined for graphs with at most 64 vertices.
    pub fn adjacency_bits(&self, threshold: EdgeThreshold) -> Vec<u64> {
        debug_assert!(self.n <= 64, "adjacency bitsets need n <= 64");
        (0..self.n)
            .map(|i| {
                self.neighbors(i, threshold)
                    .fold(0u64, |mask, j| mask | (1u64 << j))
            })
            .collect()
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            for i in 0..self.n {
                debug_assert_eq!(self.weight(i, i), 0, "self-loop weight at {i}");
                for j in 0..self.n {
                    debug_assert!(self.weight(i, j) < MAX_WEIGHT);
                    debug_assert_eq!(self.weight(i, j), self.weight(j, i), "asymmetric at ({i},{j})");
                }
            }
        }
    }
}

impl fmt::Display for Graph {
    /// Prints the weight matrix, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:2}", self.weight(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn check_vertex_count(n: usize) -> Result<()> {
    if n < 1 {
        return Err(ColoringError::InvalidArgument(
            "vertex count must be at least 1".to_owned(),
        ));
    }
    Ok(())
}

/// `n * (n-1) / 2`.
#[inline]
const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

// ============================================================================
// Tests
// ============================================================================
