//! A keyed, weighted adjacency-list graph.
//!
//! Vertices are identified by user keys and, internally, by a dense [`VertexId`]
//! equal to their insertion index. Out-edges are kept per vertex in insertion order,
//! and an ordered-pair index gives constant-time [`DirectedGraph::find_edge`].
//!
//! The graph is append-only: once relaxation starts it is only ever borrowed
//! immutably, so algorithms can share it freely.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use std::collections::HashMap;

use num_traits::Float;

use super::edge_type::{Directed, EdgeType};
#[cfg(debug_assertions)]
use super::math_assert::math_assert_msg;
use crate::error::GraphError;

/// Dense handle for a vertex in one specific graph.
///
/// Ids are assigned in insertion order starting at zero.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    #[inline(always)]
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Returns the insertion index of the vertex.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What [`DirectedGraph::add_edge`] does when the ordered pair already has an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Fail with [`GraphError::DuplicateEdge`].
    #[default]
    Reject,
    /// Overwrite the weight; the edge keeps its original position in adjacency order.
    Replace,
}

/// A directed edge with a finite weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    source: VertexId,
    target: VertexId,
    weight: W,
}

impl<W: Copy> Edge<W> {
    /// Tail of the edge.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Head of the edge.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Weight of the edge. Always finite.
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A graph of uniquely keyed vertices joined by weighted edges.
///
/// `Ty` selects directedness; with [`Undirected`](super::Undirected) every call to
/// `add_edge` stores the edge in both directions.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `add_edge` | \(O(1)\) amortized | Pair index rejects duplicates |
/// | `vertex_by_key` | \(O(1)\) expected | Hash lookup |
/// | `find_edge` | \(O(1)\) expected | Hash lookup on the ordered pair |
/// | `neighbors` | \(O(\text{out-degree})\) | Edge-insertion order |
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, W = f64, Ty = Directed> {
    keys: Vec<K>,
    index: HashMap<K, VertexId>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge<W>>,
    pairs: HashMap<(VertexId, VertexId), usize>,
    policy: EdgePolicy,
    _ty: PhantomData<Ty>,
}

impl<K, W, Ty> DirectedGraph<K, W, Ty>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    /// Creates an empty graph that rejects duplicate edges.
    pub fn new() -> Self {
        Self::with_edge_policy(EdgePolicy::Reject)
    }

    /// Creates an empty graph with the given duplicate-edge policy.
    pub fn with_edge_policy(policy: EdgePolicy) -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            pairs: HashMap::new(),
            policy,
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize, policy: EdgePolicy) -> Self {
        Self {
            keys: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edges: Vec::new(),
            pairs: HashMap::new(),
            policy,
            _ty: PhantomData,
        }
    }

    /// Returns true for directed graphs.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// The duplicate-edge policy fixed at construction.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Inserts a vertex and returns its id.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if the key is already present.
    pub fn add_vertex(&mut self, key: K) -> Result<VertexId, GraphError> {
        if self.index.contains_key(&key) {
            return Err(GraphError::duplicate_vertex(&key));
        }
        let id = VertexId::new(self.keys.len());
        self.index.insert(key.clone(), id);
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Inserts an edge `from -> to` between two existing vertices.
    ///
    /// Every check runs before anything is written, so a failed call leaves the
    /// graph untouched.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either key was never added.
    /// - [`GraphError::InvalidWeight`] if `weight` is NaN or infinite.
    /// - [`GraphError::DuplicateEdge`] if the pair already has an edge and the
    ///   policy is [`EdgePolicy::Reject`].
    pub fn add_edge(&mut self, from: &K, to: &K, weight: W) -> Result<(), GraphError> {
        let u = *self.index.get(from).ok_or_else(|| GraphError::unknown_vertex(from))?;
        let v = *self.index.get(to).ok_or_else(|| GraphError::unknown_vertex(to))?;
        if !weight.is_finite() {
            return Err(GraphError::invalid_weight(
                from,
                to,
                weight.to_f64().unwrap_or(f64::NAN),
            ));
        }

        if self.policy == EdgePolicy::Reject {
            let reversed = !Ty::is_directed() && self.pairs.contains_key(&(v, u));
            if self.pairs.contains_key(&(u, v)) || reversed {
                return Err(GraphError::duplicate_edge(from, to));
            }
        }

        self.insert_edge(u, v, weight);
        if !Ty::is_directed() && u != v {
            self.insert_edge(v, u, weight);
        }
        Ok(())
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: W) {
        if let Some(&slot) = self.pairs.get(&(u, v)) {
            self.edges[slot].weight = weight;
            return;
        }
        let slot = self.edges.len();
        self.edges.push(Edge {
            source: u,
            target: v,
            weight,
        });
        self.adjacency[u.index()].push(slot);
        self.pairs.insert((u, v), slot);
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of stored edges (undirected edges count twice).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + DoubleEndedIterator {
        (0..self.keys.len()).map(VertexId::new)
    }

    /// `(id, key)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, &K)> + '_ {
        self.keys.iter().enumerate().map(|(i, k)| (VertexId::new(i), k))
    }

    /// Returns true if a vertex with this key exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up a vertex by key.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if no vertex carries the key.
    pub fn vertex_by_key(&self, key: &K) -> Result<VertexId, GraphError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(key))
    }

    /// Returns the key of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to this graph.
    pub fn key(&self, vertex: VertexId) -> &K {
        self.assert_vertex(vertex);
        &self.keys[vertex.index()]
    }

    /// Out-going edges of `vertex`, in edge-insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to this graph.
    pub fn out_edges(&self, vertex: VertexId) -> impl ExactSizeIterator<Item = &Edge<W>> + '_ {
        self.assert_vertex(vertex);
        self.adjacency[vertex.index()].iter().map(|&slot| &self.edges[slot])
    }

    /// Vertices reachable from `vertex` through exactly one out-going edge.
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to this graph.
    pub fn neighbors(&self, vertex: VertexId) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.out_edges(vertex).map(|e| e.target)
    }

    /// Returns the out-degree of a vertex.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.assert_vertex(vertex);
        self.adjacency[vertex.index()].len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge<W>> + '_ {
        self.edges.iter()
    }

    /// Finds the edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if no such directed edge exists.
    ///
    /// # Panics
    /// Panics if either id does not belong to this graph.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Result<&Edge<W>, GraphError> {
        self.assert_vertex(from);
        self.assert_vertex(to);
        self.pairs
            .get(&(from, to))
            .map(|&slot| &self.edges[slot])
            .ok_or_else(|| GraphError::edge_not_found(self.key(from), self.key(to)))
    }

    /// Key-level variant of [`find_edge`](Self::find_edge).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for an unknown key, otherwise as `find_edge`.
    pub fn find_edge_by_key(&self, from: &K, to: &K) -> Result<&Edge<W>, GraphError> {
        let u = self.vertex_by_key(from)?;
        let v = self.vertex_by_key(to)?;
        self.find_edge(u, v)
    }

    #[inline(always)]
    fn assert_vertex(&self, vertex: VertexId) {
        assert!(
            vertex.index() < self.keys.len(),
            "vertex {vertex} out of bounds for n={}",
            self.keys.len()
        );
    }

    /// Validates the structural invariants of the graph.
    ///
    /// Checks that:
    /// 1. Keys, the key index and adjacency lists agree on the vertex count
    /// 2. Every edge endpoint is in bounds
    /// 3. The pair index and adjacency lists describe the same edge set
    /// 4. Every weight is finite
    ///
    /// Returns `true` if all invariants hold.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.keys.len();
        math_assert_msg(self.index.len() == n, "key index must cover every vertex");
        math_assert_msg(self.adjacency.len() == n, "one adjacency list per vertex");

        for (i, key) in self.keys.iter().enumerate() {
            math_assert_msg(
                self.index.get(key) == Some(&VertexId::new(i)),
                "key index must point at the insertion slot",
            );
        }

        let mut listed = 0usize;
        for (u, slots) in self.adjacency.iter().enumerate() {
            for &slot in slots {
                let edge = &self.edges[slot];
                math_assert_msg(edge.source.index() == u, "edge listed under its source");
                math_assert_msg(edge.target.index() < n, "edge target out of bounds");
                math_assert_msg(edge.weight.is_finite(), "edge weight must be finite");
                listed += 1;
            }
        }
        math_assert_msg(listed == self.edges.len(), "every edge appears in one list");
        math_assert_msg(self.pairs.len() == self.edges.len(), "one edge per ordered pair");

        true
    }
}

impl<K, W, Ty> Default for DirectedGraph<K, W, Ty>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}
