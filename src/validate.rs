//! Deterministic validation of colorings against a graph.

use crate::color::Coloring;
use crate::error::{ColoringError, Result};
use crate::graph::{EdgeThreshold, Graph};

/// Checks that `coloring` covers every vertex and that no edge joins equal colors.
///
/// # Errors
/// Returns [`ColoringError::ColoringSizeMismatch`] if the lengths differ, or
/// [`ColoringError::InvalidColoring`] naming the first conflicting edge `(u, v)` with `u < v`.
pub fn validate_coloring(graph: &Graph, threshold: EdgeThreshold, coloring: &Coloring) -> Result<()> {
    let n = graph.vertex_count();
    if coloring.len() != n {
        return Err(ColoringError::ColoringSizeMismatch {
            expected: n,
            got: coloring.len(),
        });
    }

    for u in 0..n {
        for v in (u + 1)..n {
            if graph.has_edge(u, v, threshold) && coloring.color(u) == coloring.color(v) {
                return Err(ColoringError::InvalidColoring {
                    u,
                    v,
                    color: coloring.color(u).symbol(),
                });
            }
        }
    }
    Ok(())
}

/// Returns `true` if `coloring` is a proper coloring of `graph` at `threshold`.
pub fn is_proper(graph: &Graph, threshold: EdgeThreshold, coloring: &Coloring) -> bool {
    validate_coloring(graph, threshold, coloring).is_ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> EdgeThreshold {
        EdgeThreshold::new(0).unwrap()
    }

    #[test]
    fn accepts_proper_bipartite_coloring() {
        let g = Graph::complete_bipartite(2, 3).unwrap();
        let coloring = Coloring::from_digits(&[0, 0, 1, 1, 1]).unwrap();
        assert!(validate_coloring(&g, t0(), &coloring).is_ok());
    }

    #[test]
    fn reports_first_conflicting_edge() {
        let g = Graph::complete(4).unwrap();
        let coloring = Coloring::from_digits(&[0, 1, 2, 1]).unwrap();
        let err = validate_coloring(&g, t0(), &coloring).unwrap_err();
        assert!(matches!(
            err,
            ColoringError::InvalidColoring { u: 1, v: 3, color: '1' }
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        let g = Graph::empty(3).unwrap();
        let coloring = Coloring::from_digits(&[0, 0]).unwrap();
        assert!(matches!(
            validate_coloring(&g, t0(), &coloring),
            Err(ColoringError::ColoringSizeMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn monochrome_coloring_is_proper_only_without_edges() {
        let g = Graph::generate(8, 11).unwrap();
        let mono = Coloring::from_digits(&[0; 8]).unwrap();
        assert!(is_proper(&g, EdgeThreshold::NONE, &mono));
        assert_eq!(
            is_proper(&g, t0(), &mono),
            g.edge_count(t0()) == 0
        );
    }
}
