//! A validated adjacency-matrix graph and its MST construction.
//!
//! [`Graph::new`] is the boundary where graph semantics are enforced: the
//! matrix must be symmetric and every weight finite and non-negative. Once a
//! `Graph` exists, the MST construction can assume those invariants and
//! carries no re-checks of its own.

use std::path::Path;

use num_traits::Float;

use crate::error::GraphError;
use crate::io::{self, Delimiter};
use crate::matrix::SquareMatrix;

mod mst;

/// An undirected, weighted graph backed by a dense adjacency matrix.
///
/// `adj[i][j]` holds the weight of the edge between vertices `i` and `j`,
/// with `0` meaning "no edge". Because zero doubles as the absent-edge
/// sentinel, a genuine zero-weight edge cannot be represented: it is
/// indistinguishable from no edge and will never be selected. Diagonal
/// entries (self-loops) are ignored by the algorithm.
///
/// The matrix is immutable once the graph is constructed.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    adjacency: SquareMatrix<W>,
}

impl<W: Float> Graph<W> {
    /// Wraps an adjacency matrix, validating graph semantics.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidWeight`] if any entry is negative, NaN, or
    ///   infinite.
    /// - [`GraphError::Asymmetric`] if `adj[i][j] != adj[j][i]` anywhere.
    pub fn new(adjacency: SquareMatrix<W>) -> Result<Self, GraphError> {
        let dim = adjacency.dim();
        for row in 0..dim {
            for col in 0..dim {
                let w = adjacency.row(row)[col];
                if !w.is_finite() || w < W::zero() {
                    return Err(GraphError::InvalidWeight { row, col });
                }
            }
        }
        for row in 0..dim {
            for col in (row + 1)..dim {
                if adjacency.row(row)[col] != adjacency.row(col)[row] {
                    return Err(GraphError::Asymmetric { row, col });
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.dim()
    }

    /// Read-only view of the adjacency matrix.
    #[inline(always)]
    pub fn adjacency(&self) -> &SquareMatrix<W> {
        &self.adjacency
    }
}

impl Graph<f64> {
    /// Loads a graph from a delimited text file.
    ///
    /// Convenience over [`io::load_delimited`] followed by [`Graph::new`].
    ///
    /// # Errors
    ///
    /// Any loader error, plus the validation errors of [`Graph::new`].
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        delimiter: Delimiter,
    ) -> Result<Self, GraphError> {
        let matrix = io::load_delimited(path, delimiter)?;
        Self::new(matrix)
    }
}
