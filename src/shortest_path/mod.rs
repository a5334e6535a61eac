//! Shortest paths by Bellman-Ford relaxation.
//!
//! - [`bellman_ford`]: single-source distances and predecessors; tolerates negative
//!   edge weights.
//! - [`all_pairs`]: one run per vertex, collected into [`AllPairs`].
//! - [`reconstruct_path`]: turns a predecessor table into a vertex sequence.
//!
//! The default entry points never look for negative cycles. The `_checked`
//! variants add one verification pass and return [`GraphError::NegativeCycle`]
//! instead of a best-effort answer.
//!
//! [`GraphError::NegativeCycle`]: crate::GraphError::NegativeCycle

pub mod all_pairs;
pub mod bellman_ford;
pub mod path;

#[cfg(feature = "parallel")]
pub use all_pairs::par_all_pairs;
pub use all_pairs::{all_pairs, all_pairs_checked, AllPairs};
pub use bellman_ford::{bellman_ford, bellman_ford_checked, bellman_ford_from, ShortestPaths};
pub use path::reconstruct_path;
