//! # `relax` - All-Pairs Shortest Paths by Bellman-Ford Relaxation
//!
//! Computes shortest paths in directed, weighted graphs, including graphs with
//! negative edge weights. Bellman-Ford runs once per vertex and the runs are
//! collected into all-pairs distance and predecessor tables.
//!
//! ## Architecture
//!
//! 1. **Graph model** ([`graph`]):
//!    - Uniquely keyed vertices, dense [`VertexId`] handles in insertion order
//!    - Finite-weight edges, at most one per ordered pair
//!    - Duplicate-edge policy fixed at construction ([`EdgePolicy`])
//!
//! 2. **Engine** ([`shortest_path`]):
//!    - `n - 1` relaxation passes per source, early exit on a quiet pass
//!    - Predecessor tables as id lookups, never object references
//!    - Opt-in `|V|`-th verification pass for negative cycles
//!
//! 3. **Boundary** ([`matrix`], [`report`]):
//!    - JSON weight matrices with explicit "no edge" cells
//!    - Spreadsheet labels, padded text tables, JSON reports
//!
//! The engine never logs and never mutates the graph; all-pairs results borrow the
//! graph immutably for as long as they live.
//!
//! ## Correctness
//!
//! **Theorem (Convergence)**: If no negative cycle is reachable from the source,
//! `n - 1` passes yield exact shortest distances, because a shortest simple path
//! has at most `n - 1` edges and pass `k` fixes every path of `k` edges.
//!
//! **Theorem (Verification)**: A negative cycle is reachable from the source iff an
//! `n`-th pass would still lower some distance.
//!
//! ## Example
//!
//! ```rust
//! use relax::{all_pairs, DirectedGraph};
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! for key in ["A", "B", "C", "D"] {
//!     graph.add_vertex(key).unwrap();
//! }
//! graph.add_edge(&"A", &"B", 1.0).unwrap();
//! graph.add_edge(&"A", &"C", 4.0).unwrap();
//! graph.add_edge(&"B", &"C", -3.0).unwrap();
//! graph.add_edge(&"C", &"D", 1.0).unwrap();
//!
//! let results = all_pairs(&graph);
//! assert_eq!(results.distance(&"A", &"D").unwrap(), -1.0);
//! assert_eq!(
//!     results.path(&"A", &"D").unwrap(),
//!     Some(vec![&"A", &"B", &"C", &"D"])
//! );
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod matrix;
pub mod report;
pub mod shortest_path;

pub use error::GraphError;
pub use graph::{Directed, DirectedGraph, Edge, EdgePolicy, EdgeType, Undirected, VertexId};
pub use matrix::{MatrixError, WeightMatrix};
pub use report::{column_label, Report};
#[cfg(feature = "parallel")]
pub use shortest_path::par_all_pairs;
pub use shortest_path::{
    all_pairs, all_pairs_checked, bellman_ford, bellman_ford_checked, bellman_ford_from,
    reconstruct_path, AllPairs, ShortestPaths,
};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Ids are plain indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    // Predecessor slots stay within two words.
    assert!(mem::size_of::<Option<VertexId>>() <= 2 * mem::size_of::<usize>());
};
