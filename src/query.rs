//! External entry point for route queries and graph session ownership.

use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::{PathQuery, ShortestPath};
use crate::graph::labeled::RouteGraph;
use crate::graph::traits::NodeId;
use crate::Result;

/// Resolved answer for one algorithm, with the path in label space
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<W> {
    /// A shortest route exists from start to end
    Found { distance: W, path: Vec<String> },

    /// Both endpoints exist but no directed path connects them
    Unreachable,

    /// Start or end is not a node of the graph
    InvalidInput,
}

impl<W> RouteOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Reported distance: the route length, infinity when unreachable,
    /// none when the query itself was invalid
    pub fn distance(&self) -> Option<W> {
        match self {
            RouteOutcome::Found { distance, .. } => Some(*distance),
            RouteOutcome::Unreachable => Some(W::infinity()),
            RouteOutcome::InvalidInput => None,
        }
    }

    /// Route node labels, empty unless a route was found
    pub fn path(&self) -> &[String] {
        match self {
            RouteOutcome::Found { path, .. } => path,
            _ => &[],
        }
    }

    /// Returns true if a route was found
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found { .. })
    }
}

/// Side-by-side answers from the two algorithms for one query
///
/// The sides are computed independently: an internal error on one side
/// leaves the other side's report intact.
#[derive(Debug)]
pub struct RouteComparison<W> {
    pub dijkstra: Result<RouteOutcome<W>>,
    pub floyd_warshall: Result<RouteOutcome<W>>,
}

/// Validates query endpoints and runs both algorithms side by side
#[derive(Debug, Default)]
pub struct QueryCoordinator {
    dijkstra: Dijkstra,
    all_pairs: FloydWarshall,
}

impl QueryCoordinator {
    /// Creates a coordinator with default algorithm settings
    pub fn new() -> Self {
        QueryCoordinator::default()
    }

    /// Caps the node count the all-pairs side will accept
    pub fn with_all_pairs_node_limit(mut self, limit: usize) -> Self {
        self.all_pairs = FloydWarshall::new().with_node_limit(limit);
        self
    }

    /// Answers one (start, end) query with both algorithms.
    ///
    /// An unknown start or end label short-circuits to `InvalidInput` on
    /// both sides without invoking either algorithm. Otherwise the two
    /// algorithms run independently and report their own results.
    pub fn compute<W>(&self, graph: &RouteGraph<W>, start: &str, end: &str) -> RouteComparison<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        let (from, to) = match (graph.node_id(start), graph.node_id(end)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return RouteComparison {
                    dijkstra: Ok(RouteOutcome::InvalidInput),
                    floyd_warshall: Ok(RouteOutcome::InvalidInput),
                }
            }
        };

        RouteComparison {
            dijkstra: run(&self.dijkstra, graph, from, to),
            floyd_warshall: run(&self.all_pairs, graph, from, to),
        }
    }
}

fn run<W, A>(
    algorithm: &A,
    graph: &RouteGraph<W>,
    start: NodeId,
    end: NodeId,
) -> Result<RouteOutcome<W>>
where
    W: Float + Zero + Debug + Copy,
    A: ShortestPath<W, RouteGraph<W>>,
{
    let query = algorithm.query(graph, start, end)?;
    Ok(label_outcome(graph, query))
}

/// Maps a vertex-id query result back into label space
fn label_outcome<W>(graph: &RouteGraph<W>, query: PathQuery<W>) -> RouteOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    match query {
        PathQuery::Found { distance, path } => RouteOutcome::Found {
            distance,
            path: path.iter().map(|&v| graph.label(v).to_string()).collect(),
        },
        PathQuery::Unreachable => RouteOutcome::Unreachable,
        PathQuery::InvalidInput => RouteOutcome::InvalidInput,
    }
}

/// Long-lived owner of the active graph with atomic-swap reload
///
/// Queries take a snapshot of the current graph; a reload replaces the
/// whole graph behind the lock, so in-flight queries keep reading the
/// graph they started with and never observe partial state.
#[derive(Debug)]
pub struct RouteSession<W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: Mutex<Arc<RouteGraph<W>>>,
    coordinator: QueryCoordinator,
}

impl<W> RouteSession<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a session owning the given graph
    pub fn new(graph: RouteGraph<W>) -> Self {
        RouteSession {
            graph: Mutex::new(Arc::new(graph)),
            coordinator: QueryCoordinator::new(),
        }
    }

    /// Creates a session with a custom coordinator configuration
    pub fn with_coordinator(graph: RouteGraph<W>, coordinator: QueryCoordinator) -> Self {
        RouteSession {
            graph: Mutex::new(Arc::new(graph)),
            coordinator,
        }
    }

    /// Hands out the currently loaded graph
    pub fn snapshot(&self) -> Arc<RouteGraph<W>> {
        self.graph.lock().unwrap().clone()
    }

    /// Replaces the loaded graph wholesale
    pub fn reload(&self, graph: RouteGraph<W>) {
        *self.graph.lock().unwrap() = Arc::new(graph);
    }

    /// Answers a query against the currently loaded graph
    pub fn query(&self, start: &str, end: &str) -> RouteComparison<W> {
        let graph = self.snapshot();
        self.coordinator.compute(&graph, start, end)
    }
}
