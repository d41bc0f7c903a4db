//! # `spantree` - Minimum spanning trees over dense adjacency matrices
//!
//! Computes a Minimum Spanning Tree (MST) of an undirected, weighted graph
//! supplied as a dense adjacency matrix, using a priority-queue form of
//! Prim's algorithm with a deterministic insertion-order tie-break.
//!
//! ## Representation
//!
//! - **Dense matrices**: graphs are square matrices of non-negative weights,
//!   `adj[i][j]` holding the weight of the undirected edge `(i, j)` and `0`
//!   meaning "no edge". The result is a matrix of the same shape with the
//!   accepted tree edges written symmetrically and zero elsewhere.
//! - **Intentionally dense**: the construction is O(V^2 log V)-class and aimed
//!   at modest vertex counts (pairwise-distance matrices and the like). There
//!   is no adjacency-list representation and no Fibonacci-heap machinery.
//!
//! ## Guarantees
//!
//! - **Validated at the boundary**: [`Graph::new`] rejects asymmetric matrices
//!   and negative or non-finite weights before the algorithm ever runs;
//!   squareness is enforced by the [`SquareMatrix`] type itself.
//! - **Deterministic**: the start vertex is explicit and equal-weight edges
//!   are resolved by enqueue order, so a given input always yields the same
//!   tree.
//! - **Total**: a disconnected input produces [`GraphError::Disconnected`]
//!   rather than a partial tree or an unbounded loop.
//!
//! ## Example
//!
//! ```rust
//! use spantree::{Graph, SquareMatrix};
//!
//! // A square of side 1 with one diagonal of weight 2.
//! let adj: SquareMatrix<f64> = SquareMatrix::from_vec(
//!     vec![
//!         0.0, 1.0, 2.0, 1.0, //
//!         1.0, 0.0, 1.0, 0.0, //
//!         2.0, 1.0, 0.0, 1.0, //
//!         1.0, 0.0, 1.0, 0.0,
//!     ],
//!     4,
//! );
//!
//! let graph = Graph::new(adj).unwrap();
//! let mst = graph.construct_mst().unwrap();
//!
//! // The three side edges are chosen; the diagonal is not.
//! assert_eq!(mst.count_nonzero(), 2 * 3);
//! assert!((mst.lower_triangle_sum() - 3.0).abs() < 1e-9);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod io;
pub mod matrix;

pub use error::GraphError;
pub use graph::Graph;
pub use io::{load_delimited, Delimiter};
pub use matrix::SquareMatrix;
