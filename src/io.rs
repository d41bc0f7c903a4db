//! Loading adjacency matrices from delimited text files.
//!
//! This is the input collaborator of the crate, not part of the MST core:
//! it turns a text file into a [`SquareMatrix<f64>`] and nothing more.
//! Validation of graph semantics (symmetry, weight range) happens later, in
//! [`Graph::new`](crate::Graph::new).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::GraphError;
use crate::matrix::SquareMatrix;

/// How cells are separated within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma-separated values, surrounding whitespace trimmed per cell.
    Comma,
    /// Any run of spaces or tabs.
    Whitespace,
}

impl Delimiter {
    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Comma => line.split(',').map(str::trim).collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }
}

/// Reads a delimited text file into a square matrix of `f64` weights.
///
/// Blank lines are skipped, so trailing newlines are harmless. Every
/// remaining line must hold exactly as many cells as there are lines.
///
/// # Errors
///
/// - [`GraphError::Io`] if the file cannot be read.
/// - [`GraphError::Parse`] for a cell that is not a number, with its 1-based
///   line and column.
/// - [`GraphError::NotSquare`] if the rows do not form a square matrix.
pub fn load_delimited<P: AsRef<Path>>(
    path: P,
    delimiter: Delimiter,
) -> Result<SquareMatrix<f64>, GraphError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let matrix = parse_delimited(&contents, delimiter)?;
    debug!(
        path = %path.display(),
        dim = matrix.dim(),
        "loaded adjacency matrix"
    );
    Ok(matrix)
}

/// Parses already-loaded delimited text into a square matrix.
///
/// # Errors
///
/// Same as [`load_delimited`], minus the I/O case.
pub fn parse_delimited(
    contents: &str,
    delimiter: Delimiter,
) -> Result<SquareMatrix<f64>, GraphError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col_idx, token) in delimiter.split(line).into_iter().enumerate() {
            let value: f64 = token.parse().map_err(|_| GraphError::Parse {
                line: line_idx + 1,
                column: col_idx + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    SquareMatrix::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_delimited() {
        let text = "0, 1, 2\n1, 0, 3\n2, 3, 0\n";
        let mat = parse_delimited(text, Delimiter::Comma).unwrap();
        assert_eq!(mat.dim(), 3);
        assert_eq!(mat.get(1, 2), Some(3.0));
    }

    #[test]
    fn test_parse_whitespace_delimited() {
        let text = "0.0  1.5\n1.5\t0.0\n";
        let mat = parse_delimited(text, Delimiter::Whitespace).unwrap();
        assert_eq!(mat.dim(), 2);
        assert_eq!(mat.get(0, 1), Some(1.5));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "\n0,1\n\n1,0\n\n";
        let mat = parse_delimited(text, Delimiter::Comma).unwrap();
        assert_eq!(mat.dim(), 2);
    }

    #[test]
    fn test_bad_token_reports_position() {
        let text = "0,1\n1,x\n";
        match parse_delimited(text, Delimiter::Comma) {
            Err(GraphError::Parse { line: 2, column: 2, token }) => {
                assert_eq!(token, "x");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let text = "0,1,2\n1,0\n2,0,0\n";
        assert!(matches!(
            parse_delimited(text, Delimiter::Comma),
            Err(GraphError::NotSquare { .. })
        ));
    }
}
