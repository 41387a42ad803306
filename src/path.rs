//! Shared path reconstruction over a predecessor relation.

use log::warn;

use crate::graph::traits::NodeId;
use crate::{Error, Result};

/// Rebuilds the start-to-end vertex sequence from a predecessor relation.
///
/// Walks backward from `end` following `pred_of` and reverses the chain.
/// The walk is bounded by the vertex count: a longer chain means the
/// predecessor bookkeeping is corrupt (a relaxation bug introduced a
/// cycle), which is reported as an error instead of looping. A chain that
/// dead-ends before reaching `start` is reported the same way.
pub fn walk_predecessors<F>(
    start: NodeId,
    end: NodeId,
    vertex_count: usize,
    pred_of: F,
) -> Result<Vec<NodeId>>
where
    F: Fn(NodeId) -> Option<NodeId>,
{
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        if path.len() > vertex_count {
            warn!(
                "predecessor walk exceeded {} vertices without reaching {}",
                vertex_count, start
            );
            return Err(Error::InconsistentPredecessors(current));
        }

        match pred_of(current) {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => {
                warn!(
                    "predecessor chain dead-ends at vertex {} before reaching {}",
                    current, start
                );
                return Err(Error::InconsistentPredecessors(current));
            }
        }
    }

    path.reverse();
    Ok(path)
}
