//! Error types for graph construction, loading, and MST computation.

use core::fmt;

/// The error type for every fallible operation in this crate.
///
/// Shape and weight problems are reported at the construction boundary
/// (`SquareMatrix::from_rows`, `Graph::new`), so the algorithm itself only
/// ever fails with [`GraphError::StartOutOfBounds`] or
/// [`GraphError::Disconnected`].
#[derive(Debug)]
pub enum GraphError {
    /// The input rows do not form a square matrix.
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the offending row (or expected column count).
        cols: usize,
    },
    /// `adj[row][col] != adj[col][row]`; the graph is not undirected.
    Asymmetric {
        /// Row index of the first mismatching cell.
        row: usize,
        /// Column index of the first mismatching cell.
        col: usize,
    },
    /// An entry is negative, NaN, or infinite.
    InvalidWeight {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
    },
    /// The requested start vertex does not exist.
    StartOutOfBounds {
        /// Requested start vertex.
        start: usize,
        /// Number of vertices in the graph.
        dim: usize,
    },
    /// The candidate queue drained before every vertex was reached.
    Disconnected {
        /// Vertices incorporated into the tree before the queue emptied.
        reached: usize,
        /// Total vertex count.
        total: usize,
    },
    /// An I/O failure while reading a matrix file.
    Io(std::io::Error),
    /// A token in a matrix file could not be parsed as a number.
    Parse {
        /// 1-based line number of the offending token.
        line: usize,
        /// 1-based column (token index) within the line.
        column: usize,
        /// The token as it appeared in the file.
        token: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "adjacency matrix is not square ({rows} rows, row of length {cols})")
            }
            Self::Asymmetric { row, col } => {
                write!(f, "adjacency matrix is not symmetric at ({row}, {col})")
            }
            Self::InvalidWeight { row, col } => {
                write!(f, "weight at ({row}, {col}) is negative or not finite")
            }
            Self::StartOutOfBounds { start, dim } => {
                write!(f, "start vertex {start} out of bounds for {dim} vertices")
            }
            Self::Disconnected { reached, total } => {
                write!(f, "graph is disconnected: reached {reached} of {total} vertices")
            }
            Self::Io(err) => write!(f, "failed to read matrix file: {err}"),
            Self::Parse { line, column, token } => {
                write!(f, "invalid number {token:?} at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
