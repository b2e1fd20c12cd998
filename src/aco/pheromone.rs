//! Pheromone state.

use crate::graph::DistanceMatrix;

use super::types::Tour;

/// The colony's accumulated memory: one non-negative scalar per directed
/// edge, stored as a dense row-major n×n matrix.
///
/// Starts uniform at `1/n` and is mutated in place each iteration, with
/// deposits applied before evaporation. Evaporation multiplies every
/// entry by a retention factor in (0, 1], so entries can approach zero
/// but never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates the initial pheromone state for an `size`-node graph,
    /// every entry at `1/size`.
    pub fn initial(size: usize) -> Self {
        Self {
            data: vec![1.0 / size as f64; size * size],
            size,
        }
    }

    /// Returns the pheromone level on the directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// The outgoing-edge row of node `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Deposits `1/distance` on every edge of the tour, in the traversed
    /// direction only. The reverse edge `(to, from)` is left untouched.
    ///
    /// The degenerate single-node self-loop deposits nothing.
    pub fn deposit_along(&mut self, tour: &Tour, graph: &DistanceMatrix) {
        for &(from, to) in tour.edges() {
            if from == to {
                continue;
            }
            self.data[from * self.size + to] += 1.0 / graph.get(from, to);
        }
    }

    /// Multiplies every entry by `decay`, simulating evaporation.
    ///
    /// Applies uniformly, including to pheromone deposited earlier in
    /// the same iteration.
    pub fn evaporate(&mut self, decay: f64) {
        debug_assert!(decay > 0.0 && decay <= 1.0);
        for entry in &mut self.data {
            *entry *= decay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn triangle_graph() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![INF, 2.0, 4.0],
            vec![2.0, INF, 5.0],
            vec![4.0, 5.0, INF],
        ])
        .expect("valid")
    }

    #[test]
    fn test_initial_uniform() {
        let pheromone = PheromoneMatrix::initial(4);
        assert_eq!(pheromone.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert!((pheromone.get(i, j) - 0.25).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_deposit_is_directional() {
        let graph = triangle_graph();
        let mut pheromone = PheromoneMatrix::initial(3);
        let tour = Tour::from_edges(vec![(0, 1), (1, 2), (2, 0)]);

        pheromone.deposit_along(&tour, &graph);

        let base = 1.0 / 3.0;
        assert!((pheromone.get(0, 1) - (base + 1.0 / 2.0)).abs() < 1e-12);
        assert!((pheromone.get(1, 2) - (base + 1.0 / 5.0)).abs() < 1e-12);
        assert!((pheromone.get(2, 0) - (base + 1.0 / 4.0)).abs() < 1e-12);
        // reverse directions untouched
        assert!((pheromone.get(1, 0) - base).abs() < 1e-12);
        assert!((pheromone.get(2, 1) - base).abs() < 1e-12);
        assert!((pheromone.get(0, 2) - base).abs() < 1e-12);
    }

    #[test]
    fn test_self_loop_deposits_nothing() {
        let graph = DistanceMatrix::from_rows(&[vec![INF]]).expect("valid");
        let mut pheromone = PheromoneMatrix::initial(1);
        pheromone.deposit_along(&Tour::from_edges(vec![(0, 0)]), &graph);
        assert!((pheromone.get(0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaporation_scales_by_decay_power() {
        // With no deposits, k evaporations scale the uniform 1/n matrix
        // by exactly decay^k. Isolates the decay math from stochastic
        // tour construction.
        let decay = 0.95;
        let k = 7;
        let mut pheromone = PheromoneMatrix::initial(3);
        for _ in 0..k {
            pheromone.evaporate(decay);
        }
        let expected = decay_pow(decay, k) / 3.0;
        for i in 0..3 {
            for j in 0..3 {
                assert!((pheromone.get(i, j) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_entries_stay_non_negative() {
        let graph = triangle_graph();
        let mut pheromone = PheromoneMatrix::initial(3);
        let tour = Tour::from_edges(vec![(0, 2), (2, 1), (1, 0)]);
        for _ in 0..1000 {
            pheromone.deposit_along(&tour, &graph);
            pheromone.evaporate(0.5);
        }
        for i in 0..3 {
            for j in 0..3 {
                assert!(pheromone.get(i, j) >= 0.0);
            }
        }
    }

    fn decay_pow(decay: f64, k: u32) -> f64 {
        // Repeated multiplication, matching evaporate's arithmetic
        // bit-for-bit (powi may round differently).
        (0..k).fold(1.0, |acc, _| acc * decay)
    }
}
