use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::{PriorityQueue, SearchTables};
use crate::graph::Edge;

/// Priority queue backed by an unsorted array of node IDs.
///
/// Extraction scans every queued node, so there is no decrease-key step:
/// a lowered distance is picked up by the next scan. Ties go to the node
/// that comes first in queue order, which is node ID order minus the nodes
/// already extracted.
#[derive(Debug)]
pub struct LinearQueue<W>
where
    W: Float + Debug,
{
    tables: SearchTables<W>,

    /// Nodes whose distance is not final yet
    queue: Vec<usize>,
}

impl<W> LinearQueue<W>
where
    W: Float + Debug,
{
    /// Queued node IDs in scan order
    pub fn queued(&self) -> &[usize] {
        &self.queue
    }
}

impl<W> PriorityQueue<W> for LinearQueue<W>
where
    W: Float + Debug,
{
    fn initialize(node_count: usize, source: usize) -> Self {
        LinearQueue {
            tables: SearchTables::new(node_count, source),
            queue: (0..node_count).collect(),
        }
    }

    fn extract_min(&mut self) -> Option<usize> {
        let mut best: Option<(usize, W)> = None;

        for (slot, &node) in self.queue.iter().enumerate() {
            let distance = self.tables.distance(node);
            match best {
                Some((_, best_distance)) if !(distance < best_distance) => {}
                _ => best = Some((slot, distance)),
            }
        }

        // `remove` keeps the remaining order stable for tie-breaking
        best.map(|(slot, _)| self.queue.remove(slot))
    }

    fn relax<I>(&mut self, node: usize, edges: I)
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        for edge in edges {
            self.tables.try_relax(node, &edge);
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn tables(&self) -> &SearchTables<W> {
        &self.tables
    }

    fn into_tables(self) -> SearchTables<W> {
        self.tables
    }
}
