//! `SquareMatrix` — a dense row-major square matrix.
//!
//! The backing storage is one contiguous `Vec<W>` indexed as
//! `row * dim + col`, keeping row traversals cache-friendly. Squareness is a
//! property of the type: every constructor either takes a single dimension or
//! verifies the shape, so downstream code never re-checks it.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A dense square matrix of edge weights.
///
/// Used both for the input adjacency matrix and for the MST result. The
/// inspection helpers ([`count_nonzero`](Self::count_nonzero),
/// [`lower_triangle_sum`](Self::lower_triangle_sum),
/// [`min_positive`](Self::min_positive), [`is_symmetric`](Self::is_symmetric))
/// cover the checks callers typically run on a returned tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareMatrix<W> {
    data: Vec<W>,
    dim: usize,
}

impl<W: Float> SquareMatrix<W> {
    /// Creates a `dim x dim` matrix of zeros.
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![W::zero(); dim * dim],
            dim,
        }
    }

    /// Creates a matrix from a linear row-major vector.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim * dim`.
    pub fn from_vec(data: Vec<W>, dim: usize) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "vector length must match dimensions"
        );
        Self { data, dim }
    }

    /// Creates a matrix from nested rows, verifying the shape.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotSquare`] if any row's length differs from the
    /// row count.
    pub fn from_rows(rows: &[Vec<W>]) -> Result<Self, GraphError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(GraphError::NotSquare {
                    rows: dim,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, dim })
    }

    /// Returns the dimension (number of rows, equal to number of columns).
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the element at `(row, col)`, or `None` if out of bounds.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<W> {
        if row < self.dim && col < self.dim {
            Some(self.data[row * self.dim + col])
        } else {
            None
        }
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: W) {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of bounds for dimension {}",
            self.dim
        );
        self.data[row * self.dim + col] = value;
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline(always)]
    pub fn row(&self, row: usize) -> &[W] {
        assert!(row < self.dim, "row {row} out of bounds for dimension {}", self.dim);
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Returns the whole matrix as a row-major slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[W] {
        &self.data
    }

    /// Counts the nonzero cells over the full matrix.
    ///
    /// For a symmetric edge encoding each undirected edge contributes two
    /// cells, so a spanning tree of `V` vertices yields `2 * (V - 1)`.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|w| **w != W::zero()).count()
    }

    /// Sums the lower triangle including the diagonal.
    ///
    /// On a symmetric edge matrix this is the total edge weight, each edge
    /// counted once.
    pub fn lower_triangle_sum(&self) -> W {
        let mut total = W::zero();
        for row in 0..self.dim {
            for col in 0..=row {
                total = total + self.data[row * self.dim + col];
            }
        }
        total
    }

    /// Returns the smallest strictly positive entry, or `None` if every cell
    /// is zero.
    pub fn min_positive(&self) -> Option<W> {
        self.data
            .iter()
            .copied()
            .filter(|w| *w > W::zero())
            .fold(None, |best, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }

    /// Checks `self[i][j] == self[j][i]` for all cells, within `tolerance`.
    pub fn is_symmetric(&self, tolerance: W) -> bool {
        for row in 0..self.dim {
            for col in (row + 1)..self.dim {
                let a = self.data[row * self.dim + col];
                let b = self.data[col * self.dim + row];
                if (a - b).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
