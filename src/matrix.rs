//! Weight-matrix boundary: JSON in, validated tagged cells, graph out.
//!
//! A cell is `Some(weight)` for a finite number and `None` otherwise, so "no edge"
//! is explicit here and never reaches the graph. Row `i`, column `j` is the edge
//! `i -> j`; the diagonal must be zero and never produces an edge.

use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use num_traits::Float;
use serde_json::Value;

use crate::error::GraphError;
use crate::graph::{DirectedGraph, EdgePolicy};
use crate::report::column_label;

/// Reasons a weight matrix cannot be loaded or turned into a graph.
#[derive(Debug)]
pub enum MatrixError {
    /// The input file could not be read.
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input is not valid JSON.
    Parse(serde_json::Error),
    /// The top-level value is not an array.
    NotAnArray,
    /// A row is not an array.
    RowNotAnArray {
        /// Index of the offending row.
        row: usize,
    },
    /// The matrix has no rows.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Row count differs from column count.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },
    /// A diagonal cell is not the number zero.
    NonZeroDiagonal {
        /// Index of the offending diagonal cell.
        index: usize,
    },
    /// The graph model rejected the matrix.
    Graph(GraphError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREFIX: &str = "Input cannot be parsed as a matrix";
        match self {
            Self::Read { path, .. } => write!(f, "cannot read {}", path.display()),
            Self::Parse(err) => write!(f, "{PREFIX} - invalid JSON: {err}"),
            Self::NotAnArray => write!(f, "{PREFIX} - it is not an array"),
            Self::RowNotAnArray { row } => {
                write!(f, "{PREFIX} - it must be comprised of arrays only (row {row})")
            }
            Self::Empty => write!(f, "{PREFIX} - it is empty"),
            Self::RaggedRows { row, expected, found } => write!(
                f,
                "{PREFIX} - all of its arrays must be the same length \
                 (row {row} has {found}, expected {expected})"
            ),
            Self::NotSquare { rows, columns } => {
                write!(f, "{PREFIX} - it must be square ({rows} rows, {columns} columns)")
            }
            Self::NonZeroDiagonal { index } => write!(
                f,
                "The main diagonal of the matrix must all be zero (cell {index},{index})"
            ),
            Self::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for MatrixError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

/// A validated square matrix of optional edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W = f64> {
    rows: Vec<Vec<Option<W>>>,
}

impl WeightMatrix<f64> {
    /// Reads and validates a JSON matrix file.
    ///
    /// # Errors
    /// [`MatrixError::Read`] for I/O failures, otherwise as [`from_json_str`].
    ///
    /// [`from_json_str`]: Self::from_json_str
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading weight matrix");
        let text = fs::read_to_string(path).map_err(|source| MatrixError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a JSON array of arrays.
    ///
    /// # Errors
    /// [`MatrixError::Parse`] for malformed JSON, otherwise as [`from_json_value`].
    ///
    /// [`from_json_value`]: Self::from_json_value
    pub fn from_json_str(text: &str) -> Result<Self, MatrixError> {
        let value: Value = serde_json::from_str(text).map_err(MatrixError::Parse)?;
        Self::from_json_value(&value)
    }

    /// Converts a JSON value: numbers become weights, anything else "no edge".
    ///
    /// # Errors
    /// Any shape error described by [`MatrixError`].
    pub fn from_json_value(value: &Value) -> Result<Self, MatrixError> {
        let rows = value.as_array().ok_or(MatrixError::NotAnArray)?;
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| -> Result<Vec<Option<f64>>, MatrixError> {
                let cells = cells.as_array().ok_or(MatrixError::RowNotAnArray { row })?;
                Ok(cells.iter().map(Value::as_f64).collect())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl<W: Float> WeightMatrix<W> {
    /// Validates rows of optional weights.
    ///
    /// Non-finite weights are normalised to `None`.
    ///
    /// # Errors
    /// [`MatrixError::Empty`], [`MatrixError::RaggedRows`], [`MatrixError::NotSquare`]
    /// or [`MatrixError::NonZeroDiagonal`].
    pub fn from_rows(mut rows: Vec<Vec<Option<W>>>) -> Result<Self, MatrixError> {
        let columns = rows.first().ok_or(MatrixError::Empty)?.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }
        if rows.len() != columns {
            return Err(MatrixError::NotSquare {
                rows: rows.len(),
                columns,
            });
        }

        for cell in rows.iter_mut().flatten() {
            if matches!(cell, Some(w) if !w.is_finite()) {
                *cell = None;
            }
        }
        for (index, cells) in rows.iter().enumerate() {
            if cells[index] != Some(W::zero()) {
                return Err(MatrixError::NonZeroDiagonal { index });
            }
        }

        let matrix = Self { rows };
        tracing::debug!(
            size = matrix.size(),
            edges = matrix.edge_count(),
            "weight matrix validated"
        );
        Ok(matrix)
    }

    /// Side length of the matrix (the vertex count of its graph).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cell `(row, column)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<W> {
        self.rows[row][column]
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Option<W>>] {
        &self.rows
    }

    /// Number of off-diagonal cells that carry a weight.
    pub fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(j, cell)| i != j && cell.is_some())
                    .count()
            })
            .sum()
    }

    /// Spreadsheet labels for every index: `A`, `B`, ..., `Z`, `AA`, ...
    pub fn labels(&self) -> Vec<String> {
        (0..self.size()).map(column_label).collect()
    }

    /// Builds a directed graph with one vertex per index, keyed by `label(index)`.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `label` repeats a key.
    pub fn to_graph<K, F>(&self, mut label: F) -> Result<DirectedGraph<K, W>, GraphError>
    where
        K: Eq + core::hash::Hash + Clone + fmt::Debug,
        F: FnMut(usize) -> K,
    {
        let mut graph = DirectedGraph::with_capacity(self.size(), EdgePolicy::Reject);
        let keys = (0..self.size())
            .map(|i| -> Result<K, GraphError> {
                let key = label(i);
                graph.add_vertex(key.clone())?;
                Ok(key)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (i, cells) in self.rows.iter().enumerate() {
            for (j, cell) in cells.iter().enumerate() {
                match cell {
                    Some(weight) if i != j => graph.add_edge(&keys[i], &keys[j], *weight)?,
                    _ => {}
                }
            }
        }
        Ok(graph)
    }

    /// [`to_graph`](Self::to_graph) keyed by spreadsheet column labels.
    ///
    /// # Errors
    /// Never fails for well-formed labels; the signature mirrors `to_graph`.
    pub fn to_labeled_graph(&self) -> Result<DirectedGraph<String, W>, GraphError> {
        self.to_graph(column_label)
    }
}

impl<K, W> DirectedGraph<K, W>
where
    K: Eq + core::hash::Hash + Clone + fmt::Debug,
    W: Float,
{
    /// Construction entry point: one vertex per matrix index, one edge per
    /// off-diagonal weighted cell.
    ///
    /// # Errors
    /// See [`WeightMatrix::to_graph`].
    pub fn from_matrix<F>(matrix: &WeightMatrix<W>, label: F) -> Result<Self, GraphError>
    where
        F: FnMut(usize) -> K,
    {
        matrix.to_graph(label)
    }
}
