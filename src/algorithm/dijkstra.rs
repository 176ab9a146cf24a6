use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::{
    IndexedBinaryHeap, LinearQueue, PriorityQueue, QueueStrategy, SearchTables,
};
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a selectable priority queue
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    strategy: QueueStrategy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using `strategy`
    pub fn new(strategy: QueueStrategy) -> Self {
        Dijkstra { strategy }
    }

    pub fn strategy(&self) -> QueueStrategy {
        self.strategy
    }

    /// Computes distance and predecessor tables from `source` to every node
    pub fn compute_shortest_paths<W, G>(&self, graph: &G, source: usize) -> Result<SearchTables<W>>
    where
        W: Float + Debug,
        G: Graph<W> + ?Sized,
    {
        self.run(graph, source).map(|(tables, _)| tables)
    }

    /// Like [`compute_shortest_paths`](Self::compute_shortest_paths), also
    /// returning how many nodes were extracted from the queue
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<(SearchTables<W>, usize)>
    where
        W: Float + Debug,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_node(source) {
            return Err(Error::InvalidNode(source));
        }

        let outcome = match self.strategy {
            QueueStrategy::Linear => drain::<W, G, LinearQueue<W>>(graph, source),
            QueueStrategy::BinaryHeap => drain::<W, G, IndexedBinaryHeap<W>>(graph, source),
        };

        Ok(outcome)
    }
}

/// Extracts the closest queued node and relaxes its edges until the queue
/// runs dry
fn drain<W, G, Q>(graph: &G, source: usize) -> (SearchTables<W>, usize)
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
    Q: PriorityQueue<W>,
{
    let mut queue = Q::initialize(graph.node_count(), source);
    let mut extractions = 0;

    while let Some(node) = queue.extract_min() {
        extractions += 1;
        queue.relax(node, graph.outgoing_edges(node));
    }

    (queue.into_tables(), extractions)
}
