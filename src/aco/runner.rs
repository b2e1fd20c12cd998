//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize pheromone uniformly at `1/n`
//! 2. At each iteration:
//!    a. Every ant constructs one closed tour from node 0, sampling each
//!    next node from weights `pheromone^alpha * (1/distance)^beta`
//!    b. Rank the tours by distance (stable, generation order on ties)
//!    c. The `n_best` shortest tours deposit `1/distance(edge)` on each
//!    traversed edge
//!    d. Update the global best if this iteration improved on it
//!    e. Multiply all pheromone by `decay`
//! 3. Return the global best after exactly `n_iterations` iterations
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//! Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::DistanceMatrix;

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::types::{AcoError, Tour};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest tour found across all iterations.
    pub best: Tour,

    /// Distance of the best tour.
    pub best_distance: f64,

    /// Iteration at which the best tour was first found.
    pub best_iteration: usize,

    /// Total iterations executed (always `n_iterations`).
    pub iterations: usize,

    /// Global best distance after each iteration.
    pub cost_history: Vec<f64>,
}

/// Per-iteration report passed to the observer.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent<'a> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Best tour of this iteration.
    pub best_tour: &'a Tour,
    /// Distance of this iteration's best tour.
    pub best_distance: f64,
    /// Global best distance so far, including this iteration.
    pub global_best_distance: f64,
}

/// Executes the Ant Colony Optimization algorithm.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony to completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_aco::aco::{AcoConfig, AcoRunner};
    /// use u_aco::graph::DistanceMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let graph = DistanceMatrix::from_rows(&[
    ///     vec![inf, 1.0, 2.0],
    ///     vec![1.0, inf, 3.0],
    ///     vec![2.0, 3.0, inf],
    /// ])
    /// .unwrap();
    /// let config = AcoConfig::default()
    ///     .with_n_ants(2)
    ///     .with_n_best(1)
    ///     .with_n_iterations(10)
    ///     .with_seed(1);
    ///
    /// let result = AcoRunner::run(&graph, &config).unwrap();
    /// assert_eq!(result.best.len(), 3);
    /// ```
    pub fn run(graph: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(graph, config, |_| {})
    }

    /// Runs the colony, reporting each iteration's best tour to `observer`.
    ///
    /// The observer is the only progress surface; the search itself does
    /// not depend on it.
    pub fn run_with_observer<F>(
        graph: &DistanceMatrix,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(IterationEvent<'_>),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut pheromone = PheromoneMatrix::initial(graph.size());

        // Sentinel global best; the first iteration always replaces it.
        let mut best = Tour::default();
        let mut best_distance = f64::INFINITY;
        let mut best_iteration = 0;
        let mut cost_history = Vec::with_capacity(config.n_iterations);

        for iteration in 0..config.n_iterations {
            let mut tours = Vec::with_capacity(config.n_ants);
            for _ in 0..config.n_ants {
                let tour = construct_tour(graph, &pheromone, config, &mut rng)?;
                let distance = tour.distance_on(graph);
                tours.push((tour, distance));
            }

            // Rank ascending by distance; sort_by is stable, so equal
            // distances keep generation order.
            let mut ranked: Vec<usize> = (0..tours.len()).collect();
            ranked.sort_by(|&a, &b| tours[a].1.total_cmp(&tours[b].1));

            for &idx in ranked.iter().take(config.n_best) {
                pheromone.deposit_along(&tours[idx].0, graph);
            }

            let (iteration_best, iteration_best_distance) = &tours[ranked[0]];
            if *iteration_best_distance < best_distance {
                best = iteration_best.clone();
                best_distance = *iteration_best_distance;
                best_iteration = iteration;
            }

            // Evaporation runs last, so this iteration's deposits decay too.
            pheromone.evaporate(config.decay);

            cost_history.push(best_distance);
            observer(IterationEvent {
                iteration,
                best_tour: iteration_best,
                best_distance: *iteration_best_distance,
                global_best_distance: best_distance,
            });
        }

        Ok(AcoResult {
            best,
            best_distance,
            best_iteration,
            iterations: config.n_iterations,
            cost_history,
        })
    }
}

/// Builds one closed tour from node 0, one categorical draw per step.
fn construct_tour<R: Rng>(
    graph: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Tour, AcoError> {
    let n = graph.size();
    let start = 0;
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut edges = Vec::with_capacity(n);
    let mut current = start;
    for _ in 1..n {
        let next = pick_move(graph, pheromone.row(current), current, &visited, config, rng)?;
        edges.push((current, next));
        visited[next] = true;
        current = next;
    }
    // Close the cycle. For n == 1 this is the lone self-loop (0, 0).
    edges.push((current, start));
    Ok(Tour::from_edges(edges))
}

/// Samples the next node from the categorical distribution over unvisited
/// nodes, via cumulative sum and a single uniform draw.
fn pick_move<R: Rng>(
    graph: &DistanceMatrix,
    pheromone_row: &[f64],
    current: usize,
    visited: &[bool],
    config: &AcoConfig,
    rng: &mut R,
) -> Result<usize, AcoError> {
    let mut weights = vec![0.0; visited.len()];
    let mut total = 0.0;
    for (to, weight) in weights.iter_mut().enumerate() {
        if visited[to] {
            continue;
        }
        *weight = pheromone_row[to].powf(config.alpha)
            * (1.0 / graph.get(current, to)).powf(config.beta);
        total += *weight;
    }

    if !total.is_finite() || total <= 0.0 {
        return Err(AcoError::DegenerateDistribution { node: current });
    }

    let draw = rng.random_range(0.0..total);
    let mut accumulated = 0.0;
    let mut fallback = current;
    for (to, &weight) in weights.iter().enumerate() {
        if visited[to] {
            continue;
        }
        accumulated += weight;
        fallback = to;
        if accumulated >= draw {
            return Ok(to);
        }
    }
    // Roundoff can leave the accumulated sum a hair below the draw; the
    // last unvisited node takes the remainder bucket.
    Ok(fallback)
}
