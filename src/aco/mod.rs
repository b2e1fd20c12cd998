//! Ant Colony Optimization (ACO).
//!
//! A population-based stochastic search for short round-trip tours.
//! Each iteration, every ant builds one closed tour from a fixed start
//! node, choosing the next node from a categorical distribution weighted
//! by `pheromone^alpha * (1/distance)^beta`. The best tours of the
//! iteration deposit pheromone along their edges, then all pheromone
//! evaporates by a multiplicative decay factor. The shortest tour ever
//! seen is tracked across iterations and returned.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colonies for the Traveling
//!   Salesman Problem"

mod config;
mod pheromone;
mod runner;
mod types;

pub use config::{AcoConfig, ConfigError};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner, IterationEvent};
pub use types::{AcoError, Tour};
