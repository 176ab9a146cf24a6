use std::fmt::Debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Distance and predecessor tables of one shortest path computation.
///
/// Both tables hold exactly one entry per node. Unreached nodes sit at
/// infinity with no predecessor; the source starts at zero and never gains a
/// predecessor.
///
/// Tables serialize as plain vectors so a finished run can be stored and later
/// handed back to
/// [`ShortestPathSolver::restore_computation`](crate::ShortestPathSolver::restore_computation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTables<W>
where
    W: Float + Debug,
{
    /// Best known distance from the source to each node
    distances: Vec<W>,

    /// Node preceding each node on the current shortest path tree
    predecessors: Vec<Option<usize>>,

    /// Source node ID
    source: usize,
}

impl<W> SearchTables<W>
where
    W: Float + Debug,
{
    /// Creates fresh tables for `node_count` nodes seeded at `source`.
    ///
    /// Panics if `source` is not below `node_count`.
    pub fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); node_count];
        distances[source] = W::zero();

        SearchTables {
            distances,
            predecessors: vec![None; node_count],
            source,
        }
    }

    /// Rebuilds tables from previously computed parts.
    ///
    /// Returns `None` when the two tables differ in length or `source` is out
    /// of range.
    pub fn from_parts(distances: Vec<W>, predecessors: Vec<Option<usize>>, source: usize) -> Option<Self> {
        if distances.len() != predecessors.len() || source >= distances.len() {
            return None;
        }

        Some(SearchTables {
            distances,
            predecessors,
            source,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, node: usize) -> W {
        self.distances[node]
    }

    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors[node]
    }

    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Number of nodes with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Relaxes `edge` leaving `from`.
    ///
    /// Updates the distance and predecessor of `edge.dest` only when the path
    /// through `from` is strictly shorter. Returns whether it did.
    pub fn try_relax(&mut self, from: usize, edge: &Edge<W>) -> bool {
        let candidate = self.distances[from] + edge.length;
        if candidate < self.distances[edge.dest] {
            self.distances[edge.dest] = candidate;
            self.predecessors[edge.dest] = Some(from);
            true
        } else {
            false
        }
    }
}
