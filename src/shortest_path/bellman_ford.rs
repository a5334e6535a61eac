//! Single-source Bellman-Ford relaxation.
//!
//! Variables:
//!   n       = number of vertices
//!   dist[v] = shortest known distance from the source to v
//!   pred[v] = vertex preceding v on that path, if any
//!
//! Initialise: dist[source] = 0, dist[v] = +inf for v != source, pred[v] = none
//!
//! Relax (at most n - 1 passes, vertices in insertion order):
//!   for each u with finite dist[u], for each edge (u, w, weight):
//!     if dist[u] + weight < dist[w] then dist[w] = dist[u] + weight, pred[w] = u
//!
//! A shortest simple path has at most n - 1 edges, so n - 1 passes are enough
//! when no negative cycle is reachable. A pass without updates ends the loop
//! early; that never changes the result.
//!
//! Complexity: O(n * m)

use core::fmt;
use core::hash::Hash;

use num_traits::Float;

use super::path::reconstruct_path;
use crate::error::GraphError;
use crate::graph::{DirectedGraph, EdgeType, VertexId};

/// Distance and predecessor tables for one source vertex.
///
/// Both tables are indexed by [`VertexId::index`] and are immutable once
/// returned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: VertexId,
    distances: Vec<W>,
    predecessors: Vec<Option<VertexId>>,
}

impl<W: Float> ShortestPaths<W> {
    /// The vertex the run started from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest known distance to `target`; `+inf` when unreached.
    ///
    /// # Panics
    /// Panics if `target` is outside the graph the tables were computed on.
    pub fn distance(&self, target: VertexId) -> W {
        self.distances[target.index()]
    }

    /// The vertex directly before `target` on its shortest known path.
    ///
    /// Absent for the source and for every unreached vertex.
    ///
    /// # Panics
    /// Panics if `target` is outside the graph the tables were computed on.
    pub fn predecessor(&self, target: VertexId) -> Option<VertexId> {
        self.predecessors[target.index()]
    }

    /// Returns true if some directed path leads from the source to `target`.
    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance(target).is_finite()
    }

    /// The distance table, indexed by vertex id.
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// The predecessor table, indexed by vertex id.
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Vertices from the source to `target`, both inclusive.
    ///
    /// `None` when `target` is unreachable or is the source itself.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Runs Bellman-Ford from `source`.
///
/// Handles negative edge weights. Does **not** check for negative cycles: if one is
/// reachable the tables hold the best distances found after `n - 1` passes. Use
/// [`bellman_ford_checked`] to turn that case into an error.
///
/// # Panics
/// Panics if `source` does not belong to `graph`.
pub fn bellman_ford<K, W, Ty>(graph: &DirectedGraph<K, W, Ty>, source: VertexId) -> ShortestPaths<W>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    let n = graph.vertex_count();
    assert!(source.index() < n, "source vertex {source} out of bounds for n={n}");

    let mut distances = vec![W::infinity(); n];
    let mut predecessors = vec![None; n];
    distances[source.index()] = W::zero();

    for _ in 1..n {
        if !relax_pass(graph, &mut distances, &mut predecessors) {
            break;
        }
    }

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}

/// Key-level variant of [`bellman_ford`].
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `source` is not a vertex key.
pub fn bellman_ford_from<K, W, Ty>(
    graph: &DirectedGraph<K, W, Ty>,
    source: &K,
) -> Result<ShortestPaths<W>, GraphError>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    let source = graph.vertex_by_key(source)?;
    Ok(bellman_ford(graph, source))
}

/// Runs [`bellman_ford`] followed by one verification pass.
///
/// # Errors
/// [`GraphError::NegativeCycle`] if the `n`-th pass would still shorten a distance,
/// which happens exactly when a negative cycle is reachable from `source`.
///
/// # Panics
/// Panics if `source` does not belong to `graph`.
pub fn bellman_ford_checked<K, W, Ty>(
    graph: &DirectedGraph<K, W, Ty>,
    source: VertexId,
) -> Result<ShortestPaths<W>, GraphError>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    let paths = bellman_ford(graph, source);
    if still_improves(graph, &paths.distances) {
        return Err(GraphError::negative_cycle(graph.key(source)));
    }
    Ok(paths)
}

/// One relaxation pass over every out-edge of every reached vertex.
///
/// Returns true if any distance was lowered.
fn relax_pass<K, W, Ty>(
    graph: &DirectedGraph<K, W, Ty>,
    distances: &mut [W],
    predecessors: &mut [Option<VertexId>],
) -> bool
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    let mut updated = false;
    for u in graph.vertices() {
        for edge in graph.out_edges(u) {
            // Re-read per edge: a negative self-loop may have just lowered dist[u].
            let du = distances[u.index()];
            if !du.is_finite() {
                break;
            }
            let w = edge.target().index();
            let candidate = du + edge.weight();
            if candidate < distances[w] {
                distances[w] = candidate;
                predecessors[w] = Some(u);
                updated = true;
            }
        }
    }
    updated
}

fn still_improves<K, W, Ty>(graph: &DirectedGraph<K, W, Ty>, distances: &[W]) -> bool
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: Float,
    Ty: EdgeType,
{
    graph.edges().any(|edge| {
        let du = distances[edge.source().index()];
        du.is_finite() && du + edge.weight() < distances[edge.target().index()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DirectedGraph<&'static str> {
        let mut g = DirectedGraph::new();
        for key in ["A", "B", "C", "D"] {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"A", &"C", 4.0).unwrap();
        g.add_edge(&"B", &"C", 2.0).unwrap();
        g.add_edge(&"B", &"D", 5.0).unwrap();
        g.add_edge(&"C", &"D", 1.0).unwrap();
        g
    }

    fn id(g: &DirectedGraph<&'static str>, key: &'static str) -> VertexId {
        g.vertex_by_key(&key).unwrap()
    }

    #[test]
    fn diamond_distances_from_a() {
        let g = diamond();
        let paths = bellman_ford_from(&g, &"A").unwrap();
        let got: Vec<f64> = paths.distances().to_vec();
        assert_eq!(got, vec![0.0, 1.0, 3.0, 4.0]);

        let route = paths.path_to(id(&g, "D")).unwrap();
        let names: Vec<_> = route.iter().map(|&v| *g.key(v)).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn negative_edge_is_minimized() {
        let mut g: DirectedGraph<&str> = DirectedGraph::new();
        for key in ["A", "B", "C", "D"] {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"A", &"C", 4.0).unwrap();
        g.add_edge(&"B", &"C", -3.0).unwrap();
        g.add_edge(&"B", &"D", 5.0).unwrap();
        g.add_edge(&"C", &"D", 1.0).unwrap();

        let paths = bellman_ford_from(&g, &"A").unwrap();
        assert_eq!(paths.distances(), &[0.0, 1.0, -2.0, -1.0]);
        assert_eq!(paths.predecessor(id(&g, "C")), Some(id(&g, "B")));
    }

    #[test]
    fn source_has_zero_distance_and_no_predecessor() {
        let g = diamond();
        for s in g.vertices() {
            let paths = bellman_ford(&g, s);
            assert_eq!(paths.source(), s);
            assert_eq!(paths.distance(s), 0.0);
            assert_eq!(paths.predecessor(s), None);
            assert_eq!(paths.path_to(s), None);
        }
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let g = diamond();
        let paths = bellman_ford(&g, id(&g, "D"));
        for key in ["A", "B", "C"] {
            let v = id(&g, key);
            assert!(paths.distance(v).is_infinite());
            assert!(!paths.is_reachable(v));
            assert_eq!(paths.predecessor(v), None);
            assert_eq!(paths.path_to(v), None);
        }
    }

    #[test]
    fn single_vertex_graph() {
        let mut g: DirectedGraph<u8> = DirectedGraph::new();
        let only = g.add_vertex(0).unwrap();
        let paths = bellman_ford(&g, only);
        assert_eq!(paths.distances(), &[0.0]);
    }

    #[test]
    fn unknown_source_key_is_reported() {
        let g = diamond();
        assert!(matches!(
            bellman_ford_from(&g, &"Z"),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn checked_run_reports_negative_cycle() {
        let mut g: DirectedGraph<&str> = DirectedGraph::new();
        for key in ["A", "B", "C"] {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(&"A", &"B", 1.0).unwrap();
        g.add_edge(&"B", &"C", -2.0).unwrap();
        g.add_edge(&"C", &"B", 1.0).unwrap();

        let a = id(&g, "A");
        let err = bellman_ford_checked(&g, a).unwrap_err();
        assert_eq!(err, GraphError::NegativeCycle { source: "\"A\"".into() });

        // The unchecked run still terminates with a best-effort answer.
        let paths = bellman_ford(&g, a);
        assert_eq!(paths.distance(a), 0.0);
    }

    #[test]
    fn checked_run_accepts_unreachable_negative_cycle() {
        let mut g: DirectedGraph<&str> = DirectedGraph::new();
        for key in ["A", "B", "C"] {
            g.add_vertex(key).unwrap();
        }
        g.add_edge(&"B", &"C", -2.0).unwrap();
        g.add_edge(&"C", &"B", 1.0).unwrap();

        let paths = bellman_ford_checked(&g, id(&g, "A")).unwrap();
        assert!(paths.distance(id(&g, "B")).is_infinite());
    }
}
