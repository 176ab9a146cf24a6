use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::ShortestPathSolver;
use crate::data_structures::QueueStrategy;
use crate::graph::{Graph, NetworkGraph, Point};
use crate::Length;

/// Solver type held by every session
pub type NetworkSolver = ShortestPathSolver<Length, NetworkGraph<Length>>;

/// A node of the network for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// An edge of the network for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub length: f64,
}

/// A complete network for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNetwork {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Parameters for network generation
#[derive(Debug, Deserialize)]
pub struct NetworkGenerationRequest {
    pub node_count: usize,
    #[serde(default = "default_out_degree")]
    pub out_degree: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_out_degree() -> usize { 3 }

/// Parameters for a shortest path computation
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub source: usize,
    #[serde(default)]
    pub use_heap: bool,
}

/// Response describing a finished computation
#[derive(Debug, Clone, Serialize)]
pub struct ComputeResponse {
    pub execution_id: Uuid,
    pub source: usize,
    pub strategy: QueueStrategy,
    pub elapsed_ms: f64,
    pub extractions: usize,
    pub reachable_nodes: usize,
    pub node_count: usize,
}

/// One hop of a path for web clients
#[derive(Debug, Clone, Serialize)]
pub struct WebPathEdge {
    pub from: usize,
    pub to: usize,
    pub source_location: Point,
    pub dest_location: Point,
    pub length: String,
}

/// Response to a path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub source: usize,
    pub destination: usize,
    pub reachable: bool,
    /// `None` when the predecessor chain broke off before the source
    pub cost: Option<f64>,
    pub path: Vec<WebPathEdge>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Public view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub seed: u64,
    pub last_source: Option<usize>,
    pub created_at: DateTime<Utc>,
}

/// Session owning one generated network and the solver over it
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub seed: u64,
    pub solver: NetworkSolver,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(network: NetworkGraph<Length>, seed: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            seed,
            solver: ShortestPathSolver::new(network),
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            node_count: self.solver.graph().node_count(),
            edge_count: self.solver.graph().edge_count(),
            seed: self.seed,
            last_source: self.solver.computation().map(|c| c.source()),
            created_at: self.created_at,
        }
    }
}
