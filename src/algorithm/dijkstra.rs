use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{PathQuery, ShortestPath};
use crate::data_structures::Frontier;
use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::path::walk_predecessors;
use crate::Result;

/// Classic Dijkstra's algorithm with an early exit at the requested target
///
/// Correct only for non-negative edge weights; the weights are not
/// validated here and negative values produce unspecified results, as in
/// the classical formulation.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPath<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn query(&self, graph: &G, start: NodeId, end: NodeId) -> Result<PathQuery<W>> {
        if !graph.has_vertex(start) || !graph.has_vertex(end) {
            return Ok(PathQuery::InvalidInput);
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];

        distances[start] = Some(W::zero());

        let mut frontier = Frontier::new();
        frontier.push(start, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // Skip stale entries superseded by a shorter path
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            // The target's distance is final once it leaves the frontier
            if u == end {
                break;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u + weight;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => next < current,
                };

                if improves {
                    distances[v] = Some(next);
                    predecessors[v] = Some(u);
                    frontier.push(v, next);
                }
            }
        }

        match distances[end] {
            Some(distance) => {
                let path = walk_predecessors(start, end, n, |v| predecessors[v])?;
                Ok(PathQuery::Found { distance, path })
            }
            None => Ok(PathQuery::Unreachable),
        }
    }
}
