//! Error type shared by the graph generator and both coloring engines.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ColoringError>;

/// Everything that can go wrong between "three integers" and "a chromatic number".
///
/// Input problems are reported before any work starts; a search over valid input only
/// fails when it is cancelled.
#[derive(Debug, Error)]
pub enum ColoringError {
    /// Vertex count below one, or an edge threshold outside `[0, 100)`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The brute-force search needs one alphabet symbol per vertex.
    #[error("{vertices} vertices exceed the {alphabet}-symbol color alphabet")]
    UnsupportedSize {
        /// Requested vertex count.
        vertices: usize,
        /// Size of the color alphabet.
        alphabet: usize,
    },
    /// Greedy coloring found every alphabet color already taken by a neighbor.
    #[error("color alphabet exhausted while coloring vertex {vertex}")]
    AlphabetExhausted {
        /// The vertex that could not be colored.
        vertex: usize,
    },
    /// The brute-force search hit its deadline or was cancelled.
    #[error("search aborted after evaluating {evaluated} candidate colorings")]
    SearchAborted {
        /// Candidates fully evaluated before the abort.
        evaluated: u64,
    },
    /// A coloring assigns the same color to both ends of an edge.
    #[error("invalid coloring: vertices {u} and {v} share color {color:?} across an edge")]
    InvalidColoring {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// The shared color symbol.
        color: char,
    },
    /// A coloring does not cover exactly the graph's vertices.
    #[error("coloring covers {got} vertices, graph has {expected}")]
    ColoringSizeMismatch {
        /// Vertex count of the graph.
        expected: usize,
        /// Length of the coloring.
        got: usize,
    },
    /// The dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
