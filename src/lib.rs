//! # Chromatic
//!
//! Chromatic numbers of seeded random graphs, computed two ways.
//!
//! This crate provides:
//! - A deterministic generator of symmetric weight matrices from `(vertex_count, seed)`;
//!   an edge exists wherever the weight exceeds a per-query threshold.
//! - An **exact** brute-force engine that walks every candidate coloring with a fixed-radix
//!   odometer, optionally in parallel and with a deadline.
//! - A **greedy** first-fit engine that gives an upper bound in O(n²).
//!
//! ## Quick Start
//!
//! ```
//! use chromatic::{brute_force_chromatic_number, greedy_chromatic_number, new_graph};
//!
//! let graph = new_graph(5, 42).expect("at least one vertex");
//! let exact = brute_force_chromatic_number(&graph, 50).unwrap();
//! let upper = greedy_chromatic_number(&graph, 50).unwrap();
//! assert!(1 <= exact && exact <= 5);
//! assert!(upper >= exact);
//! ```
//!
//! ## Timed runs
//!
//! ```
//! use chromatic::graph::{EdgeThreshold, Graph};
//! use chromatic::solver::Algorithm;
//!
//! let graph = Graph::complete(4).unwrap();
//! let sol = Algorithm::Greedy.run(&graph, EdgeThreshold::new(0).unwrap()).unwrap();
//! assert_eq!(sol.chromatic_number, 4);
//! assert_eq!(sol.coloring.to_string(), "0123");
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Weight-matrix graphs, thresholds and structured constructions.
//! - [`rng`]: Deterministic weight sources (xorshift, Java-compatible LCG).
//! - [`color`]: The 36-symbol alphabet, color sets and colorings.
//! - [`brute`]: Exhaustive search.
//! - [`greedy`]: First-fit heuristic.
//! - [`validate`]: Coloring validation.
//! - [`solver`]: Algorithm selection with timing.
//!
//! ## Performance Notes
//!
//! - Brute force examines up to `n^n` candidates; beyond about ten vertices use a deadline.
//! - Adjacency at a threshold is a `u64` bitset per vertex, so conflict checks walk only
//!   earlier neighbors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)] // Hot-path helpers
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing

pub mod brute;
pub mod color;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod rng;
pub mod solver;
pub mod validate;

pub use error::{ColoringError, Result};

use graph::{EdgeThreshold, Graph};

/// Generates the graph for `(vertex_count, seed)` with the default generator.
///
/// # Errors
/// Returns [`ColoringError::InvalidArgument`] if `vertex_count < 1`.
pub fn new_graph(vertex_count: usize, seed: i64) -> Result<Graph> {
    Graph::generate(vertex_count, seed)
}

/// Exact chromatic number of `graph` with edges where the weight exceeds `threshold`.
///
/// # Errors
/// [`ColoringError::InvalidArgument`] for a threshold outside `[0, 100)`,
/// [`ColoringError::UnsupportedSize`] for more than 36 vertices.
pub fn brute_force_chromatic_number(graph: &Graph, threshold: i64) -> Result<usize> {
    brute::brute_force_chromatic_number(graph, EdgeThreshold::new(threshold)?)
}

/// Greedy upper bound on the chromatic number of `graph` at `threshold`.
///
/// # Errors
/// [`ColoringError::InvalidArgument`] for a threshold outside `[0, 100)`,
/// [`ColoringError::AlphabetExhausted`] if a vertex runs out of colors.
pub fn greedy_chromatic_number(graph: &Graph, threshold: i64) -> Result<usize> {
    greedy::greedy_chromatic_number(graph, EdgeThreshold::new(threshold)?)
}

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::brute::{BruteForceConfig, BruteForceSolver};
    pub use crate::color::{Color, Coloring, ALPHABET};
    pub use crate::error::ColoringError;
    pub use crate::graph::{EdgeThreshold, Graph};
    pub use crate::rng::PrngKind;
    pub use crate::solver::{Algorithm, Solution};
    pub use crate::{brute_force_chromatic_number, greedy_chromatic_number, new_graph};
}
