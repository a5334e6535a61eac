//! Padded text tables and the serialisable run report.
//!
//! Layout of a rendered table, for padding `p`:
//! - header: `p` spaces, then each column label right-aligned to `p` plus a space
//! - rows: the row label right-aligned to `p`, then each cell right-aligned to `p`
//!   plus a space
//!
//! Cells without a finite value print as `-`.

use core::fmt::Write as _;
use core::hash::Hash;

use num_traits::Float;
use serde::Serialize;

use crate::graph::{Directed, EdgeType};
use crate::matrix::WeightMatrix;
use crate::shortest_path::AllPairs;

const MISSING: &str = "-";

/// Formats a weight the way the tables show it.
///
/// Integral values print without a fractional part, `-0` prints as `0`, and
/// non-finite values print as `-`.
pub fn format_weight<W: Float>(weight: W) -> String {
    match weight.to_f64() {
        Some(w) if w.is_finite() => {
            if w == 0.0 {
                "0".to_owned()
            } else {
                format!("{w}")
            }
        }
        _ => MISSING.to_owned(),
    }
}

/// Renders a labelled square table of pre-formatted cells.
///
/// `cells[i][j]` is printed in row `labels[i]`, column `labels[j]`.
pub fn render_table(labels: &[String], cells: &[Vec<String>], padding: usize) -> String {
    let mut out = " ".repeat(padding);
    for label in labels {
        let _ = write!(out, "{label:>padding$} ");
    }
    out.push('\n');

    for (label, row) in labels.iter().zip(cells) {
        let _ = write!(out, "{label:>padding$}");
        for cell in row {
            let _ = write!(out, "{cell:>padding$} ");
        }
        out.push('\n');
    }
    out
}

/// Everything one run produces, keyed by spreadsheet labels.
///
/// `None` marks a missing edge, an unreachable target, or an absent path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Vertex labels, in matrix order.
    pub labels: Vec<String>,
    /// The input matrix.
    pub input: Vec<Vec<Option<f64>>>,
    /// `distances[i][j]`: shortest distance from `labels[i]` to `labels[j]`.
    pub distances: Vec<Vec<Option<f64>>>,
    /// `paths[i][j]`: labels on the shortest path from `labels[i]` to `labels[j]`.
    pub paths: Vec<Vec<Option<Vec<String>>>>,
}

impl Report {
    /// Collects a report from the input matrix and the all-pairs results.
    ///
    /// # Panics
    /// Panics if `results` was computed on a graph with a different vertex count
    /// than `matrix`.
    pub fn new<K, W, Ty>(matrix: &WeightMatrix<W>, results: &AllPairs<'_, K, W, Ty>) -> Self
    where
        K: Eq + Hash + Clone + core::fmt::Debug,
        W: Float,
        Ty: EdgeType,
    {
        let graph = results.graph();
        assert_eq!(graph.vertex_count(), matrix.size(), "results do not match the matrix");

        let labels = matrix.labels();
        let input: Vec<Vec<Option<f64>>> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.and_then(finite)).collect())
            .collect();

        let mut distances: Vec<Vec<Option<f64>>> = Vec::with_capacity(labels.len());
        let mut paths: Vec<Vec<Option<Vec<String>>>> = Vec::with_capacity(labels.len());
        for (_, row) in results.iter() {
            distances.push(graph.vertices().map(|t| finite(row.distance(t))).collect());
            paths.push(
                graph
                    .vertices()
                    .map(|t| {
                        row.path_to(t)
                            .map(|route| route.iter().map(|v| labels[v.index()].clone()).collect())
                    })
                    .collect(),
            );
        }

        Self {
            labels,
            input,
            distances,
            paths,
        }
    }

    /// The input matrix as a padded table.
    pub fn render_input(&self, padding: usize) -> String {
        render_table(&self.labels, &format_cells(&self.input), padding)
    }

    /// The distance table as a padded table.
    pub fn render_distances(&self, padding: usize) -> String {
        render_table(&self.labels, &format_cells(&self.distances), padding)
    }

    /// The path table as a padded table; each cell reads `A>B>D`.
    pub fn render_paths(&self, padding: usize) -> String {
        let cells: Vec<Vec<String>> = self
            .paths
            .iter()
            .map(|row| {
                row.iter()
                    .map(|path| path.as_ref().map_or_else(|| MISSING.to_owned(), |p| p.join(">")))
                    .collect()
            })
            .collect();
        render_table(&self.labels, &cells, padding)
    }
}

/// Shorthand for a report on a directed graph keyed by labels.
pub type LabeledResults<'g, W> = AllPairs<'g, String, W, Directed>;

fn finite<W: Float>(w: W) -> Option<f64> {
    w.to_f64().filter(|v| v.is_finite())
}

fn format_cells(rows: &[Vec<Option<f64>>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or_else(|| MISSING.to_owned(), format_weight))
                .collect()
        })
        .collect()
}
