//! Ant Colony Optimization over dense distance matrices.
//!
//! Approximates shortest round-trip tours (a Traveling Salesman heuristic)
//! on a small, fully-connected weighted graph:
//!
//! - **Colony search loop**: each iteration, every ant constructs one
//!   closed tour by stochastic edge selection biased by pheromone and
//!   inverse distance; the best tours reinforce their edges and all
//!   pheromone evaporates multiplicatively.
//! - **Dense graph model**: a validated N×N distance matrix with an
//!   unreachable (+inf) diagonal.
//! - **Reproducible randomness**: a single seedable RNG stream, one draw
//!   per ant per construction step.
//!
//! # Architecture
//!
//! The crate is domain-agnostic: it knows distances, not what they measure.
//! `graph` holds the problem-side data model; `aco` holds the algorithm.
//! The search is single-threaded and fully sequential. Ants within an
//! iteration only read pheromone state; all mutation happens between
//! construction rounds.
//!
//! # Examples
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::graph::DistanceMatrix;
//!
//! let inf = f64::INFINITY;
//! let graph = DistanceMatrix::from_rows(&[
//!     vec![inf, 3.0, 4.0, 5.0, 2.0],
//!     vec![3.0, inf, 6.0, 2.0, 5.0],
//!     vec![4.0, 6.0, inf, 7.0, 3.0],
//!     vec![5.0, 2.0, 7.0, inf, 1.0],
//!     vec![2.0, 5.0, 3.0, 1.0, inf],
//! ])
//! .unwrap();
//!
//! let config = AcoConfig::default()
//!     .with_n_ants(4)
//!     .with_n_best(2)
//!     .with_n_iterations(50)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&graph, &config).unwrap();
//! assert_eq!(result.best.len(), 5);
//! assert!(result.best_distance.is_finite());
//! ```

pub mod aco;
pub mod graph;
