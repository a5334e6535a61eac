//! Keyed, weighted graphs that the shortest-path engine runs on.
//!
//! - [`DirectedGraph`]: uniquely keyed vertices, finite-weight edges, at most one
//!   edge per ordered pair.
//! - [`EdgeType`]: compile-time directedness ([`Directed`] or [`Undirected`]).

pub mod directed_graph;
pub mod edge_type;
#[cfg(debug_assertions)]
mod math_assert;

pub use directed_graph::{DirectedGraph, Edge, EdgePolicy, VertexId};
pub use edge_type::{Directed, EdgeType, Undirected};
