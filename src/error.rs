//! Errors raised by the graph model and the shortest-path engine.
//!
//! Every error is detected eagerly, at construction or lookup time, and handed
//! straight back to the caller. Nothing here is logged.

use core::fmt;

/// The error type for graph construction, lookups and checked relaxation.
///
/// Keys are carried pre-rendered (via `Debug`) so the error stays independent of
/// the graph's key type.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge references a vertex that was never added.
    UnknownVertex {
        /// The missing key.
        key: String,
    },
    /// A vertex key was inserted twice.
    DuplicateVertex {
        /// The repeated key.
        key: String,
    },
    /// An edge weight is NaN or infinite.
    InvalidWeight {
        /// Source key of the rejected edge.
        from: String,
        /// Target key of the rejected edge.
        to: String,
        /// The offending weight.
        weight: f64,
    },
    /// A key lookup found no vertex.
    VertexNotFound {
        /// The key that was looked up.
        key: String,
    },
    /// No directed edge exists for the ordered pair.
    EdgeNotFound {
        /// Source key.
        from: String,
        /// Target key.
        to: String,
    },
    /// A second edge for the same ordered pair under [`EdgePolicy::Reject`].
    ///
    /// [`EdgePolicy::Reject`]: crate::graph::EdgePolicy::Reject
    DuplicateEdge {
        /// Source key.
        from: String,
        /// Target key.
        to: String,
    },
    /// A `|V|`-th relaxation pass still improved a distance.
    ///
    /// Only produced by the checked entry points.
    NegativeCycle {
        /// The source whose run reached the cycle.
        source: String,
    },
}

impl GraphError {
    pub(crate) fn unknown_vertex(key: &impl fmt::Debug) -> Self {
        Self::UnknownVertex { key: render(key) }
    }

    pub(crate) fn duplicate_vertex(key: &impl fmt::Debug) -> Self {
        Self::DuplicateVertex { key: render(key) }
    }

    pub(crate) fn vertex_not_found(key: &impl fmt::Debug) -> Self {
        Self::VertexNotFound { key: render(key) }
    }

    pub(crate) fn edge_not_found(from: &impl fmt::Debug, to: &impl fmt::Debug) -> Self {
        Self::EdgeNotFound {
            from: render(from),
            to: render(to),
        }
    }

    pub(crate) fn duplicate_edge(from: &impl fmt::Debug, to: &impl fmt::Debug) -> Self {
        Self::DuplicateEdge {
            from: render(from),
            to: render(to),
        }
    }

    pub(crate) fn invalid_weight(from: &impl fmt::Debug, to: &impl fmt::Debug, weight: f64) -> Self {
        Self::InvalidWeight {
            from: render(from),
            to: render(to),
            weight,
        }
    }

    pub(crate) fn negative_cycle(source: &impl fmt::Debug) -> Self {
        Self::NegativeCycle {
            source: render(source),
        }
    }
}

fn render(key: &impl fmt::Debug) -> String {
    format!("{key:?}")
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { key } => write!(f, "edge references unknown vertex {key}"),
            Self::DuplicateVertex { key } => write!(f, "vertex {key} already exists"),
            Self::InvalidWeight { from, to, weight } => {
                write!(f, "edge {from} -> {to} has non-finite weight {weight}")
            }
            Self::VertexNotFound { key } => write!(f, "vertex {key} not found"),
            Self::EdgeNotFound { from, to } => write!(f, "no edge {from} -> {to}"),
            Self::DuplicateEdge { from, to } => write!(f, "edge {from} -> {to} already exists"),
            Self::NegativeCycle { source } => {
                write!(f, "negative-weight cycle reachable from {source}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
