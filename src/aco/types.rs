//! Tour representation and runner errors.

use crate::graph::DistanceMatrix;
use thiserror::Error;

use super::config::ConfigError;

/// Failures surfaced by a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Every candidate move from `node` weighed zero (or non-finite)
    /// after masking visited nodes, so no categorical distribution
    /// exists to sample from. Cannot happen for freshly validated
    /// graphs, but pheromone can underflow to exactly zero on very
    /// long runs.
    #[error("no admissible move from node {node}: selection weights sum to zero")]
    DegenerateDistribution { node: usize },
}

/// A closed tour: an ordered sequence of directed edges visiting every
/// node exactly once and returning to the start node.
///
/// For a graph of `n >= 2` nodes the tour holds `n` edges, chained so
/// that each edge starts where the previous one ended, with the last
/// edge returning to the start. The single-node graph degenerates to
/// one self-loop edge `(0, 0)` with distance 0.0 by convention.
///
/// # Examples
///
/// ```
/// use u_aco::aco::Tour;
///
/// let tour = Tour::from_edges(vec![(0, 2), (2, 1), (1, 0)]);
/// assert_eq!(tour.visit_order(), vec![0, 2, 1]);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    edges: Vec<(usize, usize)>,
}

impl Tour {
    /// Wraps an explicit edge sequence.
    pub fn from_edges(edges: Vec<(usize, usize)>) -> Self {
        Self { edges }
    }

    /// The directed edges in traversal order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges, which equals the number of visited nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The start (and end) node, if the tour is non-empty.
    pub fn start(&self) -> Option<usize> {
        self.edges.first().map(|&(from, _)| from)
    }

    /// Nodes in visiting order, one per edge source.
    pub fn visit_order(&self) -> Vec<usize> {
        self.edges.iter().map(|&(from, _)| from).collect()
    }

    /// Returns `true` if consecutive edges chain and the last edge
    /// returns to the first edge's source.
    pub fn is_closed(&self) -> bool {
        let Some(&(start, _)) = self.edges.first() else {
            return false;
        };
        let mut current = start;
        for &(from, to) in &self.edges {
            if from != current {
                return false;
            }
            current = to;
        }
        current == start
    }

    /// Total distance of the tour on the given matrix: the sum of the
    /// matrix entries along the edges.
    ///
    /// The degenerate single-node tour has distance 0.0; no traversal
    /// occurs, so the unreachable diagonal is never summed.
    pub fn distance_on(&self, graph: &DistanceMatrix) -> f64 {
        if let [(from, to)] = self.edges[..] {
            if from == to {
                return 0.0;
            }
        }
        self.edges.iter().map(|&(from, to)| graph.get(from, to)).sum()
    }
}
