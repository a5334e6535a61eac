//! Directedness markers for [`DirectedGraph`](super::DirectedGraph).

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs: `a -> b` does not imply `b -> a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directed;

/// Marker for undirected graphs: every edge is stored in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}
