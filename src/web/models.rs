use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::labeled::RouteGraph;
use crate::ingest::EdgeRecord;
use crate::query::RouteOutcome;

/// Weight type used by the serving layer
pub type WebWeight = OrderedFloat<f64>;

/// Node entry in a renderable graph snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub label: String,
    #[serde(default)]
    pub on_path: bool,
}

/// Edge entry in a renderable graph snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default)]
    pub on_path: bool,
}

/// Renderable graph snapshot with an optional highlighted route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl WebGraph {
    /// Captures the graph for rendering, flagging the nodes and hops of
    /// the highlighted route if one is given.
    ///
    /// Nodes come out in the graph's stable sorted order so selection
    /// menus stay consistent between calls.
    pub fn snapshot(graph: &RouteGraph<WebWeight>, highlight: Option<&[String]>) -> Self {
        let on_route: HashSet<&str> = highlight
            .map(|path| path.iter().map(String::as_str).collect())
            .unwrap_or_default();
        let hops: HashSet<(&str, &str)> = highlight
            .map(|path| {
                path.windows(2)
                    .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                    .collect()
            })
            .unwrap_or_default();

        let nodes = graph
            .node_labels()
            .into_iter()
            .map(|label| WebNode {
                label: label.to_string(),
                on_path: on_route.contains(label),
            })
            .collect();

        let links = graph
            .edges()
            .map(|(source, target, weight)| WebEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight: weight.into_inner(),
                on_path: hops.contains(&(source, target)),
            })
            .collect();

        WebGraph { nodes, links }
    }
}

/// Request body for building a graph from edge records
#[derive(Debug, Deserialize)]
pub struct GraphRequest {
    pub edges: Vec<EdgeRecord>,
}

/// Request body for a route query
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
}

/// Response after building a graph session
#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub graph: WebGraph,
}

/// One algorithm's answer in wire form
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub algorithm: String,
    /// ok | unreachable | invalid-input | error
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteReport {
    /// Flattens one side of a route comparison into wire form
    pub fn from_result(algorithm: &str, result: &crate::Result<RouteOutcome<WebWeight>>) -> Self {
        match result {
            Ok(RouteOutcome::Found { distance, path }) => RouteReport {
                algorithm: algorithm.to_string(),
                status: "ok".to_string(),
                distance: Some(distance.into_inner()),
                path: path.clone(),
                error: None,
            },
            Ok(RouteOutcome::Unreachable) => RouteReport {
                algorithm: algorithm.to_string(),
                status: "unreachable".to_string(),
                distance: None,
                path: Vec::new(),
                error: None,
            },
            Ok(RouteOutcome::InvalidInput) => RouteReport {
                algorithm: algorithm.to_string(),
                status: "invalid-input".to_string(),
                distance: None,
                path: Vec::new(),
                error: None,
            },
            Err(error) => RouteReport {
                algorithm: algorithm.to_string(),
                status: "error".to_string(),
                distance: None,
                path: Vec::new(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// Response for a route query: both algorithms side by side, plus a
/// snapshot with the Dijkstra route highlighted for rendering
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub start: String,
    pub end: String,
    pub dijkstra: RouteReport,
    pub floyd_warshall: RouteReport,
    pub graph: WebGraph,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Session summary for listings
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Server-side session owning one loaded graph
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<RouteGraph<WebWeight>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: RouteGraph<WebWeight>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }
}
