//! Problem-side graph model.
//!
//! A fully-connected weighted graph is represented by a dense square
//! distance matrix. Entry `(i, j)` is the cost of the directed edge
//! `i -> j`; the diagonal is +inf, so self-loops are unreachable.
//! Constructors validate the matrix once, and no mutating accessor is
//! exposed afterwards, so a `DistanceMatrix` in hand is always a
//! well-formed graph.

mod matrix;

pub use matrix::{DistanceMatrix, GraphError};
