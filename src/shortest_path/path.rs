//! Path reconstruction over a predecessor table.

use crate::graph::VertexId;

/// Walks `predecessors` backward from `target` and returns the path from `source`.
///
/// The predecessor table forms a forest rooted at `source`. The walk stops at the
/// first vertex without a predecessor; the path is valid only if that vertex is
/// `source`.
///
/// Returns `None` when:
/// - `target == source` (no edge is needed to stay put),
/// - `target` is unreachable,
/// - the chain loops, which can only happen after relaxing around a negative cycle.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    if target == source {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = predecessors[current.index()] {
        // A simple path never visits more than n vertices.
        if path.len() == predecessors.len() {
            return None;
        }
        path.push(prev);
        current = prev;
    }

    if current != source {
        return None;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn chain_is_returned_source_first() {
        // 0 -> 1 -> 2, 3 unreached
        let preds = [None, Some(v(0)), Some(v(1)), None];
        assert_eq!(reconstruct_path(&preds, v(0), v(2)), Some(vec![v(0), v(1), v(2)]));
        assert_eq!(reconstruct_path(&preds, v(0), v(1)), Some(vec![v(0), v(1)]));
    }

    #[test]
    fn source_and_unreached_targets_have_no_path() {
        let preds = [None, Some(v(0)), Some(v(1)), None];
        assert_eq!(reconstruct_path(&preds, v(0), v(0)), None);
        assert_eq!(reconstruct_path(&preds, v(0), v(3)), None);
    }

    #[test]
    fn predecessor_cycle_terminates() {
        // 1 <-> 2 loop left behind by a negative cycle
        let preds = [None, Some(v(2)), Some(v(1))];
        assert_eq!(reconstruct_path(&preds, v(0), v(2)), None);

        let self_loop = [None, Some(v(1))];
        assert_eq!(reconstruct_path(&self_loop, v(0), v(1)), None);
    }
}
