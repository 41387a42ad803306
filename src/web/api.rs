use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::graph::labeled::RouteGraph;
use crate::graph::traits::Graph;
use crate::ingest;
use crate::query::QueryCoordinator;
use crate::web::models::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub coordinator: Arc<QueryCoordinator>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            coordinator: Arc::new(QueryCoordinator::new()),
            max_sessions,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/csv", post(create_graph_from_csv))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/routes/:session_id", post(query_route))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Build a graph session from a JSON edge list
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRequest>,
) -> Result<Json<GraphResponse>, (StatusCode, Json<ErrorResponse>)> {
    let graph = RouteGraph::from_records(&request.edges);
    register_session(&state, graph)
}

/// Build a graph session from raw CSV text
pub async fn create_graph_from_csv(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GraphResponse>, (StatusCode, Json<ErrorResponse>)> {
    let records = ingest::parse_csv(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "malformed_csv".to_string(),
                message: e.to_string(),
            }),
        )
    })?;

    let graph = RouteGraph::from_records(&records);
    register_session(&state, graph)
}

fn register_session(
    state: &AppState,
    graph: RouteGraph<WebWeight>,
) -> Result<Json<GraphResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = Session::new(graph);
    let response = GraphResponse {
        session_id: session.id,
        created_at: session.created_at,
        graph: WebGraph::snapshot(&session.graph, None),
    };

    let mut sessions = state.sessions.lock().unwrap();
    if sessions.len() >= state.max_sessions {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "session_limit".to_string(),
                message: format!("session registry is full ({} sessions)", state.max_sessions),
            }),
        ));
    }

    info!(
        "created session {} with {} nodes and {} edges",
        session.id,
        session.graph.vertex_count(),
        session.graph.edge_count()
    );
    sessions.insert(session.id, session);

    Ok(Json(response))
}

/// Get the renderable snapshot of a session's graph
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(WebGraph::snapshot(&session.graph, None))),
        None => Err(session_not_found()),
    }
}

/// Answer a route query with both algorithms
pub async fn query_route(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let graph = {
        let sessions = state.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let comparison = state.coordinator.compute(&graph, &request.start, &request.end);

    let highlight: Option<Vec<String>> = match &comparison.dijkstra {
        Ok(outcome) if outcome.is_found() => Some(outcome.path().to_vec()),
        _ => None,
    };

    Ok(Json(RouteResponse {
        start: request.start,
        end: request.end,
        dijkstra: RouteReport::from_result("dijkstra", &comparison.dijkstra),
        floyd_warshall: RouteReport::from_result("floyd-warshall", &comparison.floyd_warshall),
        graph: WebGraph::snapshot(&graph, highlight.as_deref()),
    }))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionSummary>> {
    let sessions = state.sessions.lock().unwrap();

    let mut summaries: Vec<SessionSummary> = sessions
        .values()
        .map(|session| SessionSummary {
            id: session.id,
            node_count: session.graph.vertex_count(),
            edge_count: session.graph.edge_count(),
            created_at: session.created_at,
        })
        .collect();
    summaries.sort_by_key(|summary| summary.created_at);

    Json(summaries)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "crosspath",
    }))
}

fn session_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: "Session not found".to_string(),
        }),
    )
}
