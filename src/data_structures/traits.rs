use std::fmt::{self, Debug, Display};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::data_structures::SearchTables;
use crate::graph::Edge;

/// Priority queue driving Dijkstra's extract/relax loop.
///
/// A queue owns the [`SearchTables`] of the run it serves: relaxation writes
/// to them and extraction orders nodes by them.
pub trait PriorityQueue<W>
where
    W: Float + Debug,
{
    /// Builds fresh tables seeded at `source` and enqueues every node
    fn initialize(node_count: usize, source: usize) -> Self
    where
        Self: Sized;

    /// Removes and returns the queued node with the smallest distance.
    /// `None` means the queue is exhausted.
    fn extract_min(&mut self) -> Option<usize>;

    /// Relaxes every outgoing edge of `node`
    fn relax<I>(&mut self, node: usize, edges: I)
    where
        I: IntoIterator<Item = Edge<W>>;

    /// Number of nodes still queued
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tables(&self) -> &SearchTables<W>;

    /// Consumes the queue, keeping only the tables
    fn into_tables(self) -> SearchTables<W>
    where
        Self: Sized;
}

/// Which priority queue a computation runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStrategy {
    /// Unsorted array, O(V) extraction
    #[default]
    Linear,
    /// Binary heap with a position index, O(log V) extraction and decrease-key
    BinaryHeap,
}

impl QueueStrategy {
    /// Maps the `use_heap` flag of the routing interface to a strategy
    pub fn from_heap_flag(use_heap: bool) -> Self {
        if use_heap {
            QueueStrategy::BinaryHeap
        } else {
            QueueStrategy::Linear
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueueStrategy::Linear => "linear",
            QueueStrategy::BinaryHeap => "binary_heap",
        }
    }
}

impl Display for QueueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
