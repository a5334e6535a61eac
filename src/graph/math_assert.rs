//! Debug-only invariant assertion helpers.
//!
//! The graph model uses these to keep its structural invariants explicit while
//! release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
