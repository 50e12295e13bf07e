//! First-fit greedy coloring.
//!
//! Vertices are colored in index order; each takes the lowest alphabet color not already
//! used by a colored neighbor. The result is an upper bound on the chromatic number and
//! can exceed it on non-trivial graphs. Runs in O(n²).

use crate::color::{Color, ColorSet, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::{EdgeThreshold, Graph};

/// Colors of the already-colored neighbors of `v`.
///
/// `partial[w]` is `None` for vertices not yet colored; only colored vertices contribute.
pub fn neighbor_colors(
    partial: &[Option<Color>],
    graph: &Graph,
    v: usize,
    threshold: EdgeThreshold,
) -> ColorSet {
    debug_assert_eq!(partial.len(), graph.vertex_count());
    graph
        .neighbors(v, threshold)
        .filter_map(|w| partial[w])
        .collect()
}

/// Builds the first-fit coloring of `graph` at `threshold`.
///
/// # Errors
/// Returns [`ColoringError::AlphabetExhausted`] if some vertex sees all 36 colors among its
/// colored neighbors. That needs at least 36 earlier neighbors, so graphs with at most 36
/// vertices always succeed.
pub fn greedy_coloring(graph: &Graph, threshold: EdgeThreshold) -> Result<Coloring> {
    let n = graph.vertex_count();
    let mut partial: Vec<Option<Color>> = vec![None; n];
    partial[0] = Some(Color::FIRST);
    for v in 1..n {
        let blocked = neighbor_colors(&partial, graph, v, threshold);
        let color = blocked
            .first_absent()
            .ok_or(ColoringError::AlphabetExhausted { vertex: v })?;
        log::trace!("greedy: vertex {v} -> {color} (blocked {})", blocked.len());
        partial[v] = Some(color);
    }

    let colors = partial.into_iter().flatten().collect::<Vec<_>>();
    debug_assert_eq!(colors.len(), n);
    Ok(Coloring::new(colors))
}

/// Number of colors used by the first-fit coloring.
///
/// # Errors
/// See [`greedy_coloring`].
pub fn greedy_chromatic_number(graph: &Graph, threshold: EdgeThreshold) -> Result<usize> {
    greedy_coloring(graph, threshold).map(|c| c.distinct_colors())
}

// ============================================================================
// Tests
// ============================================================================
