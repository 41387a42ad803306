use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Dense vertex index assigned to every interned node label
pub type NodeId = usize;

/// Trait representing a weighted directed graph over interned vertex ids
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: NodeId) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W>;
}
