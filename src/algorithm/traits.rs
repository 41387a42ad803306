use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::Result;

/// Outcome of a single-pair shortest path computation, in vertex-id space
#[derive(Debug, Clone, PartialEq)]
pub enum PathQuery<W> {
    /// A shortest route exists; the path runs from start to end inclusive
    Found { distance: W, path: Vec<NodeId> },

    /// Both endpoints exist but no directed path connects them
    Unreachable,

    /// Start or end is not a vertex of the graph
    InvalidInput,
}

/// Common capability implemented by both shortest-path algorithms
///
/// The two implementations are invoked side by side by the query
/// coordinator; neither knows about the other.
pub trait ShortestPath<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Name of the algorithm for reports and logs
    fn name(&self) -> &'static str;

    /// Computes the shortest route between two vertices.
    ///
    /// Returns an error only on internal inconsistencies (corrupt
    /// predecessor bookkeeping); unknown vertices and unreachable pairs
    /// are ordinary outcome variants.
    fn query(&self, graph: &G, start: NodeId, end: NodeId) -> Result<PathQuery<W>>;
}
