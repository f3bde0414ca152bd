use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::ShortestPathEngine;
use crate::algorithm::validation::WeightPolicy;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::document::GraphDocument;
use crate::graph::generators::{grid_graph, layered_graph, random_graph};
use crate::graph::AdjacencyGraph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    session_timeout: Duration,
    max_generated_vertices: usize,
    max_generated_edges: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    pub fn with_config(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: config.max_sessions,
            session_timeout: Duration::minutes(config.session_timeout_minutes as i64),
            max_generated_vertices: config.max_generated_vertices,
            max_generated_edges: config.max_generated_edges,
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable",
            )
        })
    }

    /// Locks the store with every expired session already dropped
    fn live_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        let mut sessions = self.lock_sessions()?;
        let cutoff = Utc::now() - self.session_timeout;
        let before = sessions.len();
        sessions.retain(|_, s| s.created_at > cutoff);
        if sessions.len() < before {
            log::info!("expired {} sessions", before - sessions.len());
        }
        Ok(sessions)
    }

    /// Stores `session` if there is room
    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.live_sessions()?;
        if sessions.len() >= self.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions may be open", self.max_sessions),
            ));
        }
        log::info!("created session {} ({} vertices)", session.id, session.vertex_count);
        sessions.insert(session.id, session);
        Ok(())
    }

    fn session(&self, session_id: Uuid) -> Result<Session, ApiError> {
        self.live_sessions()?
            .get(&session_id)
            .cloned()
            .ok_or_else(session_not_found)
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
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/distances", post(run_distances))
        .route("/api/distances", post(compute_distances))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Store a caller-supplied graph in a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> Result<Json<Session>, ApiError> {
    request.graph.to_graph().map_err(engine_error)?;

    let session = Session::new(request.graph, request.label);
    state.insert_session(session.clone())?;
    Ok(Json(session))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    let plan = GraphPlan::from_request(&request)?;
    let fits = plan.size().map_or(false, |(vertices, edges)| {
        vertices <= state.max_generated_vertices && edges <= state.max_generated_edges
    });
    if !fits {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_graph_size",
            format!(
                "Generated graphs are limited to {} vertices and {} edges",
                state.max_generated_vertices, state.max_generated_edges
            ),
        ));
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let graph = plan.build(seed);

    let label = format!("{} (seed {})", request.graph_type, seed);
    let session = Session::new(GraphDocument::from_graph(&graph), Some(label));
    state.insert_session(session.clone())?;
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphDocument>, ApiError> {
    Ok(Json(state.session(session_id)?.graph))
}

/// Compute distances over a session's graph and remember the result
pub async fn run_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<DistancesRequest>,
) -> Result<Json<DistancesResponse>, ApiError> {
    let document = state.session(session_id)?.graph;
    let graph = document.to_graph().map_err(engine_error)?;
    let response = run_algorithm(&graph, request.start, &request.algorithm)?;

    if let Some(session) = state.live_sessions()?.get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

/// Compute distances over a graph sent with the request
pub async fn compute_distances(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<DistancesResponse>, ApiError> {
    let graph = request.graph.to_graph().map_err(engine_error)?;
    run_algorithm(&graph, request.start, &request.algorithm).map(Json)
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = state.live_sessions()?;
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    state.session(session_id).map(Json)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

/// Shape of a graph requested from `generate_graph`
enum GraphPlan {
    Random { vertices: usize, edge_factor: f64 },
    Grid { width: usize, height: usize },
    Layered { layers: usize, width: usize },
}

impl GraphPlan {
    fn from_request(request: &GraphGenerationRequest) -> Result<Self, ApiError> {
        match request.graph_type.as_str() {
            "random" => Ok(GraphPlan::Random {
                vertices: request.node_count,
                edge_factor: request.edge_factor,
            }),
            "grid" => {
                let (width, height) = request.grid_dimensions.unwrap_or_else(|| {
                    let side = (request.node_count as f64).sqrt().ceil() as usize;
                    (side, side)
                });
                Ok(GraphPlan::Grid { width, height })
            }
            "layered" => {
                let width = request.layer_width.max(1);
                let layers = (request.node_count.saturating_sub(1) / width + 1).max(1);
                Ok(GraphPlan::Layered { layers, width })
            }
            _ => Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            )),
        }
    }

    /// Upper bounds on (vertices, edges), or `None` if they do not fit in `usize`
    fn size(&self) -> Option<(usize, usize)> {
        match *self {
            GraphPlan::Random { vertices, edge_factor } => {
                if !edge_factor.is_finite() || edge_factor < 0.0 {
                    return None;
                }
                let edges = edge_factor * vertices as f64;
                (edges < usize::MAX as f64).then_some((vertices, edges as usize))
            }
            GraphPlan::Grid { width, height } => {
                let vertices = width.checked_mul(height)?;
                Some((vertices, vertices.checked_mul(4)?))
            }
            GraphPlan::Layered { layers, width } => {
                let vertices = (layers - 1).checked_mul(width)?.checked_add(1)?;
                let edges = width
                    .checked_mul(width)?
                    .checked_mul(layers.saturating_sub(2))?
                    .checked_add(width)?;
                Some((vertices, edges))
            }
        }
    }

    fn build(&self, seed: u64) -> AdjacencyGraph<usize, f64> {
        match *self {
            GraphPlan::Random { vertices, edge_factor } => {
                random_graph(vertices, edge_factor, seed)
            }
            GraphPlan::Grid { width, height } => grid_graph(width, height),
            GraphPlan::Layered { layers, width } => layered_graph(layers, width, seed),
        }
    }
}

/// The graph was validated when it was built, so the engines skip their own scan
fn run_algorithm(
    graph: &AdjacencyGraph<String, f64>,
    start: String,
    algorithm: &str,
) -> Result<DistancesResponse, ApiError> {
    let started = Instant::now();
    let (table, stats) = match algorithm {
        "dijkstra" => {
            let engine = ShortestPathEngine::new().with_weight_policy(WeightPolicy::Trust);
            let (table, stats) = engine.compute_with_stats(graph, &start).map_err(engine_error)?;
            (table, Some(stats))
        }
        "bellman-ford" => {
            let engine = BellmanFord::new().with_weight_policy(WeightPolicy::Trust);
            (engine.compute(graph, &start).map_err(engine_error)?, None)
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                format!("Unknown algorithm: {}", algorithm),
            ));
        }
    };

    Ok(DistancesResponse::from_table(algorithm, &table, started.elapsed(), stats))
}

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn engine_error(err: Error) -> ApiError {
    let code = match &err {
        Error::VertexNotFound(_) => "vertex_not_found",
        Error::MalformedGraph { .. } => "malformed_graph",
        Error::NegativeWeight { .. } => "negative_weight",
        Error::InvalidWeight { .. } => "invalid_weight",
        Error::InvalidDocument(_) => "invalid_document",
    };
    api_error(StatusCode::BAD_REQUEST, code, err.to_string())
}
