//! Crosspath - shortest-path queries over labeled directed graphs
//!
//! Builds a directed weighted graph from named edge records and answers
//! (start, end) route queries with two independent algorithms: Dijkstra's
//! single-source search and the Floyd-Warshall all-pairs computation.
//!
//! Both answers are returned side by side so callers can cross-check one
//! against the other. Unknown endpoints, unreachable pairs and internal
//! bookkeeping failures are all distinct, explicit outcomes.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod ingest;
pub mod path;
pub mod query;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra,
    floyd_warshall::{AllPairs, FloydWarshall},
    PathQuery, ShortestPath,
};
/// Re-export main types for convenient use
pub use graph::labeled::RouteGraph;
pub use query::{QueryCoordinator, RouteComparison, RouteOutcome, RouteSession};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("predecessor chain through vertex {0} does not lead back to the start")]
    InconsistentPredecessors(usize),

    #[error("graph has {nodes} nodes, exceeding the all-pairs limit of {limit}")]
    GraphTooLarge { nodes: usize, limit: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
