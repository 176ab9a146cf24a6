use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::{PriorityQueue, SearchTables};
use crate::graph::Edge;

/// Binary min-heap of node IDs keyed by the distance table, with a position
/// index mapping each queued node to its slot in the heap array.
///
/// The position index is what makes decrease-key O(log V): a node whose
/// distance dropped is found in constant time and bubbled up from there.
/// Every swap rewrites the index entries of both nodes involved.
#[derive(Debug)]
pub struct IndexedBinaryHeap<W>
where
    W: Float + Debug,
{
    tables: SearchTables<W>,

    /// Complete binary tree stored level by level
    heap: Vec<usize>,

    /// Node ID -> current slot in `heap`, `None` once the node is extracted
    positions: Vec<Option<usize>>,
}

impl<W> IndexedBinaryHeap<W>
where
    W: Float + Debug,
{
    /// Restores heap order after the distance of `node` was lowered.
    ///
    /// Nodes that are no longer queued are left alone.
    pub fn decrease_key(&mut self, node: usize) {
        if let Some(slot) = self.position(node) {
            self.bubble_up(slot);
        }
    }

    /// Current heap slot of `node`, if it is still queued
    pub fn position(&self, node: usize) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    /// Node at the root of the heap without removing it
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Checks the heap property and that the position index matches the heap
    /// array exactly.
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|slot| {
            let parent = (slot - 1) / 2;
            !(self.key(slot) < self.key(parent))
        });

        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, &node)| self.positions[node] == Some(slot));

        let tracked = self.positions.iter().filter(|p| p.is_some()).count();

        ordered && indexed && tracked == self.heap.len()
    }

    fn key(&self, slot: usize) -> W {
        self.tables.distance(self.heap[slot])
    }

    fn insert(&mut self, node: usize) {
        let slot = self.heap.len();
        self.heap.push(node);
        self.positions[node] = Some(slot);
        self.bubble_up(slot);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn bubble_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.key(parent) > self.key(slot) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Slot of the smaller child of `slot`, `None` for a leaf.
    /// A lone left child is compared against nothing.
    fn min_child(&self, slot: usize) -> Option<usize> {
        let left = 2 * slot + 1;
        if left >= self.heap.len() {
            return None;
        }

        let right = left + 1;
        if right >= self.heap.len() {
            return Some(left);
        }

        if self.key(right) < self.key(left) {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.min_child(slot) {
            if self.key(child) < self.key(slot) {
                self.swap(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }
}

impl<W> PriorityQueue<W> for IndexedBinaryHeap<W>
where
    W: Float + Debug,
{
    fn initialize(node_count: usize, source: usize) -> Self {
        let mut queue = IndexedBinaryHeap {
            tables: SearchTables::new(node_count, source),
            heap: Vec::with_capacity(node_count),
            positions: vec![None; node_count],
        };

        queue.heap.push(source);
        queue.positions[source] = Some(0);

        for node in (0..node_count).filter(|&node| node != source) {
            queue.insert(node);
        }

        queue
    }

    fn extract_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        // The last element takes the root's place before sifting down
        let min = self.heap.swap_remove(0);
        self.positions[min] = None;

        if let Some(&root) = self.heap.first() {
            self.positions[root] = Some(0);
            self.sift_down(0);
        }

        Some(min)
    }

    fn relax<I>(&mut self, node: usize, edges: I)
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        for edge in edges {
            if self.tables.try_relax(node, &edge) {
                self.decrease_key(edge.dest);
            }
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn tables(&self) -> &SearchTables<W> {
        &self.tables
    }

    fn into_tables(self) -> SearchTables<W> {
        self.tables
    }
}
