//! All-pairs driver: one Bellman-Ford run per vertex.
//!
//! Each run allocates its own tables and only reads the graph, so the runs are
//! independent. With the `parallel` feature, [`par_all_pairs`] spreads them over
//! the rayon pool; the result is identical to [`all_pairs`].

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use num_traits::Float;

use super::bellman_ford::{bellman_ford, bellman_ford_checked, ShortestPaths};
use crate::error::GraphError;
use crate::graph::{DirectedGraph, EdgeType, VertexId};

/// Per-source shortest-path tables for every vertex of a graph.
///
/// Holds a shared borrow of the graph, so the graph cannot change while the
/// results are alive. Rows follow the graph's vertex order.
#[derive(Debug, Clone)]
pub struct AllPairs<'g, K, W, Ty> {
    graph: &'g DirectedGraph<K, W, Ty>,
    rows: Vec<ShortestPaths<W>>,
}

/// Runs Bellman-Ford from every vertex, in vertex order.
///
/// No negative-cycle check is performed; see [`all_pairs_checked`].
pub fn all_pairs<K, W, Ty>(graph: &DirectedGraph<K, W, Ty>) -> AllPairs<'_, K, W, Ty>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    #[cfg(debug_assertions)]
    graph.validate_invariants();

    let rows = graph.vertices().map(|s| bellman_ford(graph, s)).collect();
    AllPairs { graph, rows }
}

/// Like [`all_pairs`], but every run gets the extra verification pass.
///
/// # Errors
/// [`GraphError::NegativeCycle`] for the first source, in vertex order, that
/// reaches a negative cycle.
pub fn all_pairs_checked<K, W, Ty>(
    graph: &DirectedGraph<K, W, Ty>,
) -> Result<AllPairs<'_, K, W, Ty>, GraphError>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    let rows = graph
        .vertices()
        .map(|s| bellman_ford_checked(graph, s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AllPairs { graph, rows })
}

/// Parallel [`all_pairs`]: sources are processed on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_all_pairs<K, W, Ty>(graph: &DirectedGraph<K, W, Ty>) -> AllPairs<'_, K, W, Ty>
where
    K: Eq + Hash + Clone + fmt::Debug + Sync,
    W: Float + Send + Sync,
    Ty: EdgeType + Sync,
{
    use rayon::prelude::*;

    let rows = (0..graph.vertex_count())
        .into_par_iter()
        .map(|s| bellman_ford(graph, VertexId::new(s)))
        .collect();
    AllPairs { graph, rows }
}

impl<'g, K, W, Ty> AllPairs<'g, K, W, Ty>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    /// The graph the tables were computed on.
    pub fn graph(&self) -> &'g DirectedGraph<K, W, Ty> {
        self.graph
    }

    /// Number of sources (equal to the vertex count).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true for an empty graph.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(source, tables)` pairs in vertex order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, &ShortestPaths<W>)> + '_ {
        self.rows.iter().map(|row| (row.source(), row))
    }

    /// Tables for one source id.
    ///
    /// # Panics
    /// Panics if `source` does not belong to the graph.
    pub fn from_vertex(&self, source: VertexId) -> &ShortestPaths<W> {
        &self.rows[source.index()]
    }

    /// Tables for one source key.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not a vertex key.
    pub fn from_source(&self, source: &K) -> Result<&ShortestPaths<W>, GraphError> {
        let s = self.graph.vertex_by_key(source)?;
        Ok(self.from_vertex(s))
    }

    /// `distances[source][target]`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either key is unknown.
    pub fn distance(&self, source: &K, target: &K) -> Result<W, GraphError> {
        let t = self.graph.vertex_by_key(target)?;
        Ok(self.from_source(source)?.distance(t))
    }

    /// `predecessors[source][target]`, as a key.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either key is unknown.
    pub fn predecessor(&self, source: &K, target: &K) -> Result<Option<&'g K>, GraphError> {
        let t = self.graph.vertex_by_key(target)?;
        let graph = self.graph;
        Ok(self.from_source(source)?.predecessor(t).map(|p| graph.key(p)))
    }

    /// Keys on the shortest known path from `source` to `target`.
    ///
    /// `Ok(None)` when `target` is unreachable or equal to `source`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either key is unknown.
    pub fn path(&self, source: &K, target: &K) -> Result<Option<Vec<&'g K>>, GraphError> {
        let t = self.graph.vertex_by_key(target)?;
        let graph = self.graph;
        Ok(self
            .from_source(source)?
            .path_to(t)
            .map(|route| route.into_iter().map(|v| graph.key(v)).collect()))
    }

    /// Nested key map `distances[source][target]`.
    pub fn distance_map(&self) -> HashMap<K, HashMap<K, W>> {
        self.iter()
            .map(|(s, row)| {
                let inner = self
                    .graph
                    .iter()
                    .map(|(t, key)| (key.clone(), row.distance(t)))
                    .collect();
                (self.graph.key(s).clone(), inner)
            })
            .collect()
    }

    /// Nested key map `predecessors[source][target]`.
    pub fn predecessor_map(&self) -> HashMap<K, HashMap<K, Option<K>>> {
        self.iter()
            .map(|(s, row)| {
                let inner = self
                    .graph
                    .iter()
                    .map(|(t, key)| (key.clone(), row.predecessor(t).map(|p| self.graph.key(p).clone())))
                    .collect();
                (self.graph.key(s).clone(), inner)
            })
            .collect()
    }
}
