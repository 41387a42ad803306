use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{PathQuery, ShortestPath};
use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::path::walk_predecessors;
use crate::{Error, Result};

/// Floyd-Warshall all-pairs shortest path computation
///
/// Builds a dense distance matrix and predecessor matrix in one cubic
/// pass, then answers individual (start, end) queries by table lookup.
/// Negative edge weights are tolerated as long as the graph contains no
/// negative cycle; negative cycles leave the result unspecified.
#[derive(Debug, Default)]
pub struct FloydWarshall {
    /// Refuse graphs larger than this many nodes instead of running the
    /// cubic pass on them
    node_limit: Option<usize>,
}

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall { node_limit: None }
    }

    /// Caps the node count this instance will accept.
    ///
    /// The cubic pass dominates run time on large graphs; with a limit
    /// set, oversized graphs fail fast with a structured error rather
    /// than silently degrading.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Runs the cubic pass over the whole graph.
    ///
    /// The matrices are rebuilt from scratch on every call; nothing is
    /// updated incrementally.
    pub fn compute<W, G>(&self, graph: &G) -> Result<AllPairs<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        if let Some(limit) = self.node_limit {
            if n > limit {
                return Err(Error::GraphTooLarge { nodes: n, limit });
            }
        }

        debug!("running all-pairs pass over {} vertices", n);

        let mut distances = vec![vec![W::infinity(); n]; n];
        let mut predecessors: Vec<Vec<Option<NodeId>>> = vec![vec![None; n]; n];

        for i in 0..n {
            distances[i][i] = W::zero();
        }

        // Seed with direct edges; self-loops cannot improve on the zero
        // self-distance and keep no predecessor
        for i in 0..n {
            for (j, weight) in graph.outgoing_edges(i) {
                if i != j {
                    distances[i][j] = weight;
                    predecessors[i][j] = Some(i);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = distances[i][k];
                if !through_k.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distances[k][j];
                    if candidate < distances[i][j] {
                        distances[i][j] = candidate;
                        // Inherit the predecessor of the k->j sub-path so
                        // reconstruction walks through the intermediate hop
                        predecessors[i][j] = predecessors[k][j];
                    }
                }
            }
        }

        Ok(AllPairs {
            distances,
            predecessors,
        })
    }
}

impl<W, G> ShortestPath<W, G> for FloydWarshall
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "floyd-warshall"
    }

    fn query(&self, graph: &G, start: NodeId, end: NodeId) -> Result<PathQuery<W>> {
        if !graph.has_vertex(start) || !graph.has_vertex(end) {
            return Ok(PathQuery::InvalidInput);
        }

        self.compute(graph)?.route(start, end)
    }
}

/// Dense all-pairs result: distance and predecessor matrices indexed by
/// vertex id
#[derive(Debug, Clone)]
pub struct AllPairs<W> {
    distances: Vec<Vec<W>>,
    predecessors: Vec<Vec<Option<NodeId>>>,
}

impl<W> AllPairs<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices covered by the matrices
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance between two vertices; infinite when unreachable
    pub fn distance(&self, start: NodeId, end: NodeId) -> W {
        self.distances[start][end]
    }

    /// Immediate predecessor of `end` on the shortest path from `start`
    pub fn predecessor(&self, start: NodeId, end: NodeId) -> Option<NodeId> {
        self.predecessors[start][end]
    }

    /// Resolves one (start, end) pair from the matrices
    pub fn route(&self, start: NodeId, end: NodeId) -> Result<PathQuery<W>> {
        let n = self.vertex_count();
        if start >= n || end >= n {
            return Ok(PathQuery::InvalidInput);
        }

        let distance = self.distances[start][end];
        if !distance.is_finite() {
            return Ok(PathQuery::Unreachable);
        }

        let path = walk_predecessors(start, end, n, |v| self.predecessors[start][v])?;
        Ok(PathQuery::Found { distance, path })
    }
}
