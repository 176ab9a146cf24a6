use network_routing::graph::generators::generate_random_network;
use network_routing::{Edge, Graph, IndexedBinaryHeap, LinearQueue, PriorityQueue};
use ordered_float::OrderedFloat;

fn edge(src: usize, dest: usize, length: f64) -> Edge<f64> {
    Edge { src, dest, length }
}

#[test]
fn test_heap_initialize_places_source_at_root() {
    let heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(10, 6);

    assert_eq!(heap.len(), 10);
    assert_eq!(heap.peek(), Some(6));
    assert_eq!(heap.position(6), Some(0));
    assert!(heap.is_valid());

    let tables = heap.tables();
    assert_eq!(tables.distance(6), 0.0);
    assert!(tables.distance(0).is_infinite());
    assert!(tables.predecessors().iter().all(|p| p.is_none()));
}

// Test decrease-key through relaxation, checking the invariants after every step
#[test]
fn test_heap_decrease_key_keeps_invariants() {
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(8, 0);
    assert_eq!(heap.extract_min(), Some(0));
    assert!(heap.is_valid());

    // Node k ends up 8 - k away, so higher IDs come out first
    for dest in 1..8 {
        heap.relax(0, [edge(0, dest, (8 - dest) as f64)]);
        assert!(heap.is_valid(), "Heap invalid after lowering node {}", dest);
        assert_eq!(heap.tables().predecessor(dest), Some(0));
    }
    assert_eq!(heap.peek(), Some(7));

    let mut extracted = Vec::new();
    while let Some(node) = heap.extract_min() {
        assert!(heap.is_valid(), "Heap invalid after extracting node {}", node);
        assert_eq!(heap.position(node), None);
        extracted.push(node);
    }

    assert_eq!(extracted, vec![7, 6, 5, 4, 3, 2, 1]);
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
}

// Test that lowering a key twice moves the node further up
#[test]
fn test_heap_repeated_decrease_key() {
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(6, 0);
    heap.extract_min();

    heap.relax(0, [edge(0, 1, 10.0), edge(0, 2, 20.0), edge(0, 3, 30.0), edge(0, 4, 40.0)]);
    assert_eq!(heap.peek(), Some(1));

    heap.relax(0, [edge(0, 4, 5.0)]);
    assert!(heap.is_valid());
    assert_eq!(heap.peek(), Some(4));
    assert_eq!(heap.tables().distance(4), 5.0);

    // A longer edge must not touch the table
    heap.relax(0, [edge(0, 4, 50.0)]);
    assert_eq!(heap.tables().distance(4), 5.0);
    assert!(heap.is_valid());
}

// Test that decrease-key on an extracted node is a no-op
#[test]
fn test_heap_decrease_key_on_extracted_node() {
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(3, 1);
    assert_eq!(heap.extract_min(), Some(1));

    heap.decrease_key(1);
    assert!(heap.is_valid());
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_heap_unknown_node_is_not_queued() {
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(3, 0);

    assert_eq!(heap.position(3), None);
    assert_eq!(heap.position(usize::MAX), None);
    heap.decrease_key(42);
    assert!(heap.is_valid());
    assert_eq!(heap.len(), 3);
}

// Test that a node with only a left child sifts against it alone
#[test]
fn test_heap_lone_left_child() {
    // Four nodes: after extracting the root, three remain and the next
    // extraction leaves a root with a single left child
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(4, 0);
    heap.extract_min();
    heap.relax(0, [edge(0, 1, 3.0), edge(0, 2, 1.0), edge(0, 3, 2.0)]);

    assert_eq!(heap.extract_min(), Some(2));
    assert!(heap.is_valid());
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_min(), Some(3));
    assert_eq!(heap.extract_min(), Some(1));
    assert!(heap.is_valid());
}

// Test the invariants on a full Dijkstra run over a random network
#[test]
fn test_heap_invariants_during_dijkstra() {
    let graph = generate_random_network(300, 3, 99).unwrap();
    let mut heap: IndexedBinaryHeap<OrderedFloat<f64>> = IndexedBinaryHeap::initialize(graph.node_count(), 0);
    let mut linear: LinearQueue<OrderedFloat<f64>> = LinearQueue::initialize(graph.node_count(), 0);

    let mut last = OrderedFloat(0.0);
    while let Some(node) = heap.extract_min() {
        assert!(heap.is_valid());

        // Extraction order never goes back down
        let distance = heap.tables().distance(node);
        assert!(distance >= last, "Node {} extracted out of order", node);
        last = distance;

        heap.relax(node, graph.outgoing_edges(node));
        assert!(heap.is_valid());
    }

    while let Some(node) = linear.extract_min() {
        linear.relax(node, graph.outgoing_edges(node));
    }

    assert_eq!(heap.tables().distances(), linear.tables().distances());
}

// Test that ties go to the first node in queue order
#[test]
fn test_linear_tie_breaking() {
    let mut queue: LinearQueue<f64> = LinearQueue::initialize(4, 2);
    assert_eq!(queue.queued(), &[0, 1, 2, 3]);

    assert_eq!(queue.extract_min(), Some(2));
    assert_eq!(queue.queued(), &[0, 1, 3]);

    queue.relax(2, [edge(2, 3, 1.0), edge(2, 1, 1.0)]);
    assert_eq!(queue.extract_min(), Some(1));
    assert_eq!(queue.extract_min(), Some(3));

    // Only unreachable nodes left: the first one still comes out
    assert_eq!(queue.extract_min(), Some(0));
    assert!(queue.tables().distance(0).is_infinite());
    assert_eq!(queue.extract_min(), None);
}

#[test]
fn test_linear_relax_uses_strict_improvement() {
    let mut queue: LinearQueue<f64> = LinearQueue::initialize(3, 0);
    queue.extract_min();

    queue.relax(0, [edge(0, 1, 4.0)]);
    assert_eq!(queue.tables().predecessor(1), Some(0));

    queue.extract_min();
    // Equal cost through node 1 does not replace the predecessor of node 2
    queue.relax(0, [edge(0, 2, 6.0)]);
    queue.relax(1, [edge(1, 2, 2.0)]);
    assert_eq!(queue.tables().distance(2), 6.0);
    assert_eq!(queue.tables().predecessor(2), Some(0));
}

#[test]
fn test_single_node_queues() {
    let mut heap: IndexedBinaryHeap<f64> = IndexedBinaryHeap::initialize(1, 0);
    let mut linear: LinearQueue<f64> = LinearQueue::initialize(1, 0);

    assert_eq!(heap.extract_min(), Some(0));
    assert_eq!(heap.extract_min(), None);
    assert_eq!(linear.extract_min(), Some(0));
    assert_eq!(linear.extract_min(), None);

    let tables = heap.into_tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables.reachable_count(), 1);
}
