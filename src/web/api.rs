use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::algorithm::apsp::AllPairsShortestPaths;
use crate::algorithm::Algorithm;
use crate::benchmark::compare;
use crate::graph::generators::{grid_graph, random_dag, random_graph};
use crate::graph::{AdjacencyList, Graph};
use crate::timing::as_millis_f64;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_poisoned",
                "Session store is unavailable",
            )
        })
    }

    /// Stores a session after purging expired ones and evicting the oldest at capacity
    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.lock_sessions()?;

        let timeout = chrono::Duration::minutes(self.config.session_timeout_minutes as i64);
        let cutoff = chrono::Utc::now() - timeout;
        sessions.retain(|_, s| s.created_at >= cutoff);

        while sessions.len() >= self.config.max_sessions.max(1) {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id)
            else {
                break;
            };
            info!("evicting session {} (limit {})", oldest, self.config.max_sessions);
            sessions.remove(&oldest);
        }

        sessions.insert(session.id, session);
        Ok(())
    }

    fn graph_of(&self, session_id: &Uuid) -> Result<SharedGraph, ApiError> {
        let sessions = self.lock_sessions()?;
        sessions
            .get(session_id)
            .map(|s| s.graph.clone())
            .ok_or_else(session_not_found)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/algorithms/run/:session_id", post(run_algorithm))
        .route("/api/algorithms/compare/:session_id", post(compare_algorithms))
        .route("/api/apsp/:session_id", post(run_apsp))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Build a graph from an explicit arc list
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> ApiResult<Session> {
    let graph = AdjacencyList::build(request.node_count, request.arcs).map_err(domain_error)?;
    let session = Session::new(graph);
    info!(
        "session {} created with {} nodes, {} arcs",
        session.id, session.summary.node_count, session.summary.arc_count
    );
    state.insert_session(session.clone())?;
    Ok(Json(session))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> ApiResult<Session> {
    let arc_count = request.node_count.saturating_mul(request.arcs_per_node);
    let graph = match request.graph_type.as_str() {
        "random" => random_graph(request.node_count, arc_count, request.max_length, request.seed),
        "grid" => {
            let (width, height) = request.grid_dimensions.unwrap_or_else(|| {
                let side = (request.node_count as f64).sqrt().ceil() as usize;
                (side, side)
            });
            grid_graph(width, height, request.max_length, request.seed)
        }
        "dag" => random_dag(
            request.node_count,
            arc_count,
            request.min_length,
            request.max_length,
            request.seed,
        ),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    }
    .map_err(domain_error)?;

    let session = Session::new(graph);
    info!(
        "session {} generated ({}) with {} nodes, {} arcs",
        session.id, request.graph_type, session.summary.node_count, session.summary.arc_count
    );
    state.insert_session(session.clone())?;
    Ok(Json(session))
}

/// Get graph shape for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<GraphSummary> {
    let sessions = state.lock_sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.summary.clone())),
        None => Err(session_not_found()),
    }
}

/// Run an algorithm on a session's graph
pub async fn run_algorithm(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AlgorithmRequest>,
) -> ApiResult<AlgorithmResponse> {
    let algorithm: Algorithm = request.algorithm.parse().map_err(domain_error)?;
    let graph = state.graph_of(&session_id)?;

    let source = request.source;
    let result = tokio::task::spawn_blocking(move || algorithm.run::<i64, _>(&*graph, source))
        .await
        .map_err(join_error)?
        .map_err(domain_error)?;

    let response = AlgorithmResponse::from(&result);
    info!(
        "{} from {} on session {}: {} relaxations in {:.3} ms",
        algorithm, source, session_id, response.relaxations, response.execution_time_ms
    );

    {
        let mut sessions = state.lock_sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// Compare several algorithms from the same source
pub async fn compare_algorithms(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<CompareResponse> {
    let algorithms = if request.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        request
            .algorithms
            .iter()
            .map(|name| name.parse::<Algorithm>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(domain_error)?
    };
    let graph = state.graph_of(&session_id)?;
    let source = request.source;

    let comparison =
        tokio::task::spawn_blocking(move || compare::<i64, _>(&*graph, source, &algorithms))
            .await
            .map_err(join_error)?;

    let mut results = Vec::new();
    let mut errors = BTreeMap::new();
    for outcome in &comparison.outcomes {
        match &outcome.result {
            Ok(result) => results.push(AlgorithmResponse::from(result)),
            Err(e) => {
                errors.insert(outcome.algorithm.to_string(), e.to_string());
            }
        }
    }

    Ok(Json(CompareResponse {
        source,
        agree: comparison.agree(),
        fastest: comparison.fastest().map(|a| a.to_string()),
        results,
        errors,
    }))
}

/// Run an all-pairs variant on a session's graph
pub async fn run_apsp(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ApspRequest>,
) -> ApiResult<ApspResponse> {
    let graph = state.graph_of(&session_id)?;
    let limit = state.config.max_apsp_nodes;
    if graph.node_count() > limit {
        return Err(domain_error(Error::GraphTooLarge {
            node_count: graph.node_count(),
            limit,
        }));
    }

    let variant = request.variant;
    let result = tokio::task::spawn_blocking(move || {
        let apsp = AllPairsShortestPaths::from_graph((*graph).clone());
        match variant {
            ApspVariant::Algebraic => apsp.algebraic_floyd_warshall(),
            ApspVariant::Graphical => apsp.graphical_floyd_warshall(),
        }
    })
    .await
    .map_err(join_error)?
    .map_err(domain_error)?;

    let n = result.node_count();
    let distances = (1..=n)
        .map(|i| (1..=n).map(|j| result.distance(i, j)).collect())
        .collect();

    Ok(Json(ApspResponse {
        execution_id: Uuid::new_v4(),
        variant,
        node_count: n,
        execution_time_ms: as_millis_f64(result.elapsed()),
        relaxations: result.relaxation_count(),
        distances,
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.lock_sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Session> {
    let sessions = state.lock_sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
    })))
}

// Helper functions

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

fn join_error(err: tokio::task::JoinError) -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "algorithm_execution_failed",
        format!("Algorithm task failed: {}", err),
    )
}

/// Maps library errors onto HTTP statuses
fn domain_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidEdge { .. } => (StatusCode::BAD_REQUEST, "invalid_graph"),
        Error::SourceNotFound(_) => (StatusCode::BAD_REQUEST, "invalid_source"),
        Error::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "invalid_algorithm"),
        Error::NegativeWeight { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_weight"),
        Error::NegativeCycle { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle"),
        Error::GraphTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "graph_too_large"),
        Error::BucketLimit { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "bucket_limit"),
        Error::Parse { .. } => (StatusCode::BAD_REQUEST, "parse_error"),
        Error::Io(_) | Error::AlgorithmError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed")
        }
    };
    api_error(status, code, err.to_string())
}
