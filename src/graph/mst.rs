//! Prim's algorithm over a dense adjacency matrix.
//!
//! The queue discipline:
//! - candidates are ordered by weight, then by a strictly increasing enqueue
//!   counter, so equal-weight edges resolve to the earlier-inserted one
//! - every positive-weight edge of a newly visited vertex is enqueued, even
//!   toward vertices already in the tree; such entries go stale and are
//!   discarded when popped
//!
//! The heap never holds more than O(V^2) entries and the whole run is a
//! single-threaded loop with no I/O.

use core::cmp::{Ordering, Reverse};
use core::fmt::Debug;
use std::collections::BinaryHeap;

use num_traits::Float;
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::matrix::SquareMatrix;

use super::Graph;

/// A candidate edge awaiting selection.
///
/// `seq` is assigned at enqueue time and breaks ties between equal weights;
/// it is unique per entry, which also makes the ordering total.
struct Candidate<W> {
    weight: W,
    seq: u64,
    from: usize,
    to: usize,
}

impl<W: Float> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Float> Eq for Candidate<W> {}

impl<W: Float> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Float> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated finite at graph construction, so partial_cmp
        // cannot fail here.
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<W: Float + Debug> Graph<W> {
    /// Constructs the minimum spanning tree, starting from vertex 0.
    ///
    /// Returns a matrix of the same dimension as the adjacency matrix with
    /// each accepted edge written symmetrically and zero elsewhere: exactly
    /// `V - 1` entries per triangle for a connected graph. The start vertex
    /// never affects the total weight, only which of several minimum trees
    /// is returned when ties exist. An empty graph yields an empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Disconnected`] if some vertex is unreachable.
    pub fn construct_mst(&self) -> Result<SquareMatrix<W>, GraphError> {
        if self.vertex_count() == 0 {
            return Ok(SquareMatrix::zeros(0));
        }
        self.construct_mst_from(0)
    }

    /// Constructs the minimum spanning tree from an explicit start vertex.
    ///
    /// # Errors
    ///
    /// - [`GraphError::StartOutOfBounds`] if `start >= vertex_count()`,
    ///   whatever the dimension.
    /// - [`GraphError::Disconnected`] if the candidate queue drains before
    ///   every vertex is reached.
    pub fn construct_mst_from(&self, start: usize) -> Result<SquareMatrix<W>, GraphError> {
        let dim = self.vertex_count();
        if start >= dim {
            return Err(GraphError::StartOutOfBounds { start, dim });
        }

        let mut result = SquareMatrix::zeros(dim);

        // A single vertex never reaches the main loop.
        if dim == 1 {
            return Ok(result);
        }

        let mut visited = vec![false; dim];
        visited[start] = true;
        let mut reached = 1usize;

        let mut seq = 0u64;
        let mut heap: BinaryHeap<Reverse<Candidate<W>>> = BinaryHeap::with_capacity(dim);
        self.enqueue_edges(start, &mut heap, &mut seq);

        let mut accepted: Vec<Candidate<W>> = Vec::with_capacity(dim - 1);

        while reached < dim {
            let Some(Reverse(candidate)) = heap.pop() else {
                return Err(GraphError::Disconnected { reached, total: dim });
            };
            if visited[candidate.to] {
                // Stale entry: the target was reached via a cheaper edge.
                continue;
            }

            visited[candidate.to] = true;
            reached += 1;
            trace!(
                from = candidate.from,
                to = candidate.to,
                weight = ?candidate.weight,
                "accepted edge"
            );
            self.enqueue_edges(candidate.to, &mut heap, &mut seq);
            accepted.push(candidate);
        }

        for edge in &accepted {
            result.set(edge.from, edge.to, edge.weight);
            result.set(edge.to, edge.from, edge.weight);
        }
        debug!(vertices = dim, edges = accepted.len(), "constructed spanning tree");
        Ok(result)
    }

    /// Enqueues every positive-weight edge leaving `from`, stamping each
    /// entry with the next sequence number. Zero cells are "no edge" and the
    /// diagonal is skipped.
    fn enqueue_edges(
        &self,
        from: usize,
        heap: &mut BinaryHeap<Reverse<Candidate<W>>>,
        seq: &mut u64,
    ) {
        for (to, &weight) in self.adjacency().row(from).iter().enumerate() {
            if to == from || weight <= W::zero() {
                continue;
            }
            *seq += 1;
            heap.push(Reverse(Candidate {
                weight,
                seq: *seq,
                from,
                to,
            }));
        }
    }
}
