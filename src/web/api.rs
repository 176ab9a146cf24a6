use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::data_structures::QueueStrategy;
use crate::graph::generators::generate_random_network;
use crate::graph::{Graph, NetworkGraph};
use crate::web::models::*;
use crate::{Error, Length};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    /// Largest network a client may generate
    pub max_nodes: usize,
    /// Largest out-degree a client may ask for
    pub max_out_degree: usize,
}

impl AppState {
    pub fn new(max_nodes: usize, max_out_degree: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_nodes,
            max_out_degree,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/networks/generate", post(generate_network))
        .route("/api/networks/:session_id", get(get_network))
        .route("/api/networks/:session_id/compute", post(compute_shortest_paths))
        .route("/api/networks/:session_id/path/:destination", get(get_shortest_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Generate a new random network and open a session for it
pub async fn generate_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkGenerationRequest>,
) -> Result<Json<SessionInfo>, ApiError> {
    if request.node_count == 0 || request.node_count > state.max_nodes {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_node_count",
            format!("Node count must be between 1 and {}", state.max_nodes),
        ));
    }
    if request.out_degree > state.max_out_degree {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_out_degree",
            format!("Out-degree must be at most {}", state.max_out_degree),
        ));
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let network = generate_random_network(request.node_count, request.out_degree, seed)
        .map_err(routing_error)?;

    let session = Session::new(network, seed);
    let session_info = session.info();
    info!(
        "Session {} created with {} nodes (seed {})",
        session_info.id, session_info.node_count, seed
    );

    state.sessions()?.insert(session.id, session);

    Ok(Json(session_info))
}

/// Get the network of a session
pub async fn get_network(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebNetwork>, ApiError> {
    let sessions = state.sessions()?;
    let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(convert_network_to_web(session.solver.graph())))
}

/// Run Dijkstra from a source node of the session's network.
///
/// The session store is only locked to copy the network out and to store the
/// result. The run itself happens on the blocking pool.
pub async fn compute_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let network = {
        let sessions = state.sessions()?;
        let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
        let network = session.solver.graph();
        if !network.has_node(request.source) {
            return Err(routing_error(Error::InvalidNode(request.source)));
        }
        network.clone()
    };

    let strategy = QueueStrategy::from_heap_flag(request.use_heap);
    let source = request.source;
    let computation = tokio::task::spawn_blocking(move || {
        let mut solver = NetworkSolver::new(network);
        solver.compute_shortest_paths(source, strategy)?;
        solver.into_computation().ok_or(Error::NotComputed)
    })
    .await
    .map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "computation_failed",
            err.to_string(),
        )
    })?
    .map_err(routing_error)?;

    let response = ComputeResponse {
        execution_id: Uuid::new_v4(),
        source,
        strategy,
        elapsed_ms: computation.elapsed().as_secs_f64() * 1000.0,
        extractions: computation.extractions(),
        reachable_nodes: computation.tables().reachable_count(),
        node_count: computation.tables().len(),
    };

    let mut sessions = state.sessions()?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;
    session.solver.adopt_computation(computation).map_err(routing_error)?;

    debug!(
        "Session {} computed from node {} with {} queue",
        session_id, source, strategy
    );

    Ok(Json(response))
}

/// Reconstruct the path to a destination from the session's last computation
pub async fn get_shortest_path(
    State(state): State<AppState>,
    Path((session_id, destination)): Path<(Uuid, usize)>,
) -> Result<Json<PathResponse>, ApiError> {
    let sessions = state.sessions()?;
    let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
    let solver = &session.solver;

    let source = solver
        .computation()
        .map(|computation| computation.source())
        .ok_or_else(|| routing_error(Error::NotComputed))?;
    let shortest_path = solver.get_shortest_path(destination).map_err(routing_error)?;
    let reachable = solver.is_reachable(destination).map_err(routing_error)?;

    let cost = shortest_path.cost.into_inner();
    let path = shortest_path
        .path
        .into_iter()
        .map(|edge| WebPathEdge {
            from: edge.from,
            to: edge.to,
            source_location: edge.source_location,
            dest_location: edge.dest_location,
            length: edge.label,
        })
        .collect();

    Ok(Json(PathResponse {
        source,
        destination,
        reachable,
        cost: cost.is_finite().then_some(cost),
        path,
    }))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionInfo>>, ApiError> {
    let sessions = state.sessions()?;
    let mut infos: Vec<SessionInfo> = sessions.values().map(Session::info).collect();
    infos.sort_by_key(|info| info.created_at);
    Ok(Json(infos))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
    }))
}

fn session_not_found(session_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

fn routing_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidNode(_) | Error::NegativeLength(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        Error::NotComputed => (StatusCode::CONFLICT, "not_computed"),
        Error::Reconstruction { .. }
        | Error::PredecessorCycle(_)
        | Error::TableSizeMismatch { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "reconstruction_failed"),
    };
    api_error(status, code, err.to_string())
}

fn convert_network_to_web(network: &NetworkGraph<Length>) -> WebNetwork {
    let nodes = network
        .nodes()
        .iter()
        .map(|node| WebNode {
            id: node.id,
            x: node.location.x,
            y: node.location.y,
        })
        .collect();

    let links = (0..network.node_count())
        .flat_map(|node| network.outgoing_edges(node))
        .map(|edge| WebEdge {
            source: edge.src,
            target: edge.dest,
            length: edge.length.into_inner(),
        })
        .collect();

    WebNetwork { nodes, links }
}
