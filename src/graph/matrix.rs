//! Dense distance matrix.

use thiserror::Error;

/// Rejected distance matrix shapes and entries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("distance matrix has no nodes")]
    Empty,
    #[error("row {row} has {got} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("data length {got} does not fill a {size}x{size} matrix")]
    DataLength { size: usize, got: usize },
    #[error("diagonal entry ({index}, {index}) must be unreachable (+inf), got {value}")]
    ReachableDiagonal { index: usize, value: f64 },
    #[error("distance ({from}, {to}) must be finite and positive, got {value}")]
    InvalidDistance { from: usize, to: usize, value: f64 },
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of traversing the directed edge `i -> j`.
/// The diagonal is +inf: a node has no edge to itself. Off-diagonal
/// entries must be finite and strictly positive; the constructors check
/// this, so every constructed matrix is a valid search graph.
///
/// # Examples
///
/// ```
/// use u_aco::graph::DistanceMatrix;
///
/// let inf = f64::INFINITY;
/// let dm = DistanceMatrix::from_rows(&[
///     vec![inf, 2.0],
///     vec![2.0, inf],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a distance matrix from explicit rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GraphError> {
        let size = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != size {
                return Err(GraphError::RowLength {
                    row,
                    expected: size,
                    got: entries.len(),
                });
            }
        }
        let data = rows.iter().flatten().copied().collect();
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a distance matrix from a flat row-major grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, GraphError> {
        if data.len() != size * size {
            return Err(GraphError::DataLength {
                size,
                got: data.len(),
            });
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Computes a Euclidean distance matrix from 2-D point coordinates.
    ///
    /// The diagonal is set to +inf. Coincident points produce a
    /// zero distance and are rejected like any other non-positive entry.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, GraphError> {
        let size = points.len();
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), GraphError> {
        if self.size == 0 {
            return Err(GraphError::Empty);
        }
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.get(i, j);
                if i == j {
                    if value != f64::INFINITY {
                        return Err(GraphError::ReachableDiagonal { index: i, value });
                    }
                } else if !value.is_finite() || value <= 0.0 {
                    return Err(GraphError::InvalidDistance {
                        from: i,
                        to: j,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// The search itself does not require symmetry; this is a convenience
    /// for callers modeling undirected graphs.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
