//! Network Routing - Dijkstra single-source shortest paths
//!
//! This library computes shortest paths over a weighted directed network using
//! one of two interchangeable priority queues: an unsorted array with O(V)
//! extraction, or an index-addressable binary heap with O(log V) decrease-key.
//! After a run, concrete paths to any destination are rebuilt from the
//! predecessor table.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{Computation, Dijkstra, PathEdge, ShortestPath, ShortestPathSolver};
pub use data_structures::{IndexedBinaryHeap, LinearQueue, PriorityQueue, QueueStrategy, SearchTables};
pub use graph::{Edge, Graph, MutableGraph, NetworkGraph, Node, Point};

/// Edge length type used by the generators, the web service and the binaries
pub type Length = ordered_float::OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Edge length must be non-negative, got {0}")]
    NegativeLength(f64),

    #[error("No shortest path computation has been run")]
    NotComputed,

    #[error("Cannot reconstruct path: no edge from {from} to {to}")]
    Reconstruction { from: usize, to: usize },

    #[error("Tables cover {actual} nodes but the network has {expected}")]
    TableSizeMismatch { expected: usize, actual: usize },

    #[error("Predecessor chain of node {0} does not lead back to the source")]
    PredecessorCycle(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
