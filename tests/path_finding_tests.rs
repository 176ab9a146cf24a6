use network_routing::graph::generators::{generate_grid_network, generate_random_network};
use network_routing::{
    Graph, Length, MutableGraph, NetworkGraph, Point, QueueStrategy, ShortestPathSolver,
};
use ordered_float::OrderedFloat;

const STRATEGIES: [QueueStrategy; 2] = [QueueStrategy::Linear, QueueStrategy::BinaryHeap];

// A -> B (1), A -> C (4), B -> C (1), B -> D (5), C -> D (1), plus an isolated E
fn create_diamond() -> NetworkGraph<Length> {
    let mut graph = NetworkGraph::new();
    for i in 0..5 {
        graph.add_node(Point::new(i as f64, 0.0));
    }

    let edges = [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 1.0), (1, 3, 5.0), (2, 3, 1.0)];
    for (from, to, length) in edges {
        graph.add_edge(from, to, OrderedFloat(length)).unwrap();
    }

    graph
}

// Test the four node scenario with both strategies
#[test]
fn test_diamond_shortest_path() {
    for strategy in STRATEGIES {
        let mut solver = ShortestPathSolver::new(create_diamond());
        solver.compute_shortest_paths(0, strategy).unwrap();

        let result = solver.get_shortest_path(3).unwrap();
        assert_eq!(result.cost, OrderedFloat(3.0), "{} queue should find cost 3", strategy);
        assert_eq!(result.nodes(), vec![0, 1, 2, 3], "{} queue should go A -> B -> C -> D", strategy);

        let labels: Vec<&str> = result.path.iter().map(|edge| edge.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "1", "1"]);

        assert_eq!(result.path[0].source_location, Point::new(0.0, 0.0));
        assert_eq!(result.path[2].dest_location, Point::new(3.0, 0.0));
    }
}

// Test that a node with no incoming edges from the source's component is unreachable
#[test]
fn test_unreachable_node() {
    for strategy in STRATEGIES {
        let mut solver = ShortestPathSolver::new(create_diamond());
        solver.compute_shortest_paths(0, strategy).unwrap();

        let result = solver.get_shortest_path(4).unwrap();
        assert_eq!(result.cost, OrderedFloat(0.0));
        assert!(result.is_empty());
        assert!(!solver.is_reachable(4).unwrap());
        assert_eq!(solver.distance(4).unwrap(), None);
    }
}

// Test the trivial path from the only node to itself
#[test]
fn test_single_node_graph() {
    let mut graph: NetworkGraph<Length> = NetworkGraph::new();
    graph.add_node(Point::new(0.5, 0.5));

    for strategy in STRATEGIES {
        let mut solver = ShortestPathSolver::new(graph.clone());
        solver.compute_shortest_paths(0, strategy).unwrap();

        let result = solver.get_shortest_path(0).unwrap();
        assert_eq!(result.cost, OrderedFloat(0.0));
        assert!(result.is_empty());
        assert!(solver.is_reachable(0).unwrap(), "The source is reachable from itself");
    }
}

// Test that both strategies produce identical distance tables
#[test]
fn test_strategies_agree_on_random_networks() {
    for seed in 0..5 {
        let graph = generate_random_network(200, 3, seed).unwrap();

        for source in [0, 17, 199] {
            let mut linear = ShortestPathSolver::new(&graph);
            let mut heap = ShortestPathSolver::new(&graph);
            linear.compute_shortest_paths(source, QueueStrategy::Linear).unwrap();
            heap.compute_shortest_paths(source, QueueStrategy::BinaryHeap).unwrap();

            let linear_tables = linear.computation().unwrap().tables();
            let heap_tables = heap.computation().unwrap().tables();
            assert_eq!(
                linear_tables.distances(),
                heap_tables.distances(),
                "Distances differ for seed {} source {}",
                seed,
                source
            );
        }
    }
}

// Test that every reconstructed path uses existing edges and sums to the distance
#[test]
fn test_path_cost_matches_distance() {
    let graph = generate_random_network(150, 4, 7).unwrap();

    for strategy in STRATEGIES {
        let mut solver = ShortestPathSolver::new(&graph);
        solver.compute_shortest_paths(3, strategy).unwrap();

        for destination in 0..graph.node_count() {
            let result = solver.get_shortest_path(destination).unwrap();

            match solver.distance(destination).unwrap() {
                Some(distance) => {
                    let total: f64 = result.path.iter().map(|edge| edge.length.into_inner()).sum();
                    assert!((total - distance.into_inner()).abs() < 1e-9);
                    assert!((result.cost.into_inner() - distance.into_inner()).abs() < 1e-9);

                    if destination != 3 {
                        assert_eq!(result.path.first().unwrap().from, 3, "Path should start at source");
                        assert_eq!(result.path.last().unwrap().to, destination, "Path should end at destination");
                    }
                    for pair in result.path.windows(2) {
                        assert_eq!(pair[0].to, pair[1].from, "Path should be continuous");
                    }
                    for edge in &result.path {
                        assert!(
                            graph.outgoing_edges(edge.from).any(|e| e.dest == edge.to),
                            "Path should only use existing edges"
                        );
                    }
                }
                None => {
                    assert_eq!(result.cost, OrderedFloat(0.0));
                    assert!(result.is_empty());
                }
            }
        }
    }
}

// Test grid distances against the Manhattan distance
#[test]
fn test_grid_distances() {
    let (width, height) = (12, 9);
    let graph = generate_grid_network(width, height).unwrap();

    let mut solver = ShortestPathSolver::new(graph);
    solver.compute_shortest_paths(0, QueueStrategy::BinaryHeap).unwrap();

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            let expected = (x + y) as f64;
            assert_eq!(solver.distance(node).unwrap(), Some(OrderedFloat(expected)));
            assert_eq!(solver.get_shortest_path(node).unwrap().path.len(), x + y);
        }
    }
}

// Test that repeated queries return identical results
#[test]
fn test_repeated_queries_are_idempotent() {
    let graph = generate_random_network(80, 3, 11).unwrap();
    let mut solver = ShortestPathSolver::new(graph);
    solver.compute_shortest_paths(5, QueueStrategy::Linear).unwrap();

    for destination in [0, 10, 40, 79] {
        let first = solver.get_shortest_path(destination).unwrap();
        let second = solver.get_shortest_path(destination).unwrap();
        assert_eq!(first, second);
    }
}

// Test that a new computation fully replaces the previous one
#[test]
fn test_recompute_replaces_previous_tables() {
    let mut solver = ShortestPathSolver::new(create_diamond());

    solver.compute_shortest_paths(0, QueueStrategy::BinaryHeap).unwrap();
    assert_eq!(solver.get_shortest_path(3).unwrap().cost, OrderedFloat(3.0));

    solver.compute_shortest_paths(2, QueueStrategy::Linear).unwrap();
    let computation = solver.computation().unwrap();
    assert_eq!(computation.source(), 2);
    assert_eq!(computation.strategy(), QueueStrategy::Linear);

    // From C only D is reachable; A and B are not
    assert_eq!(solver.get_shortest_path(3).unwrap().cost, OrderedFloat(1.0));
    assert!(!solver.is_reachable(0).unwrap());
    assert!(solver.get_shortest_path(1).unwrap().is_empty());
}

// Test that swapping the network resets the solver
#[test]
fn test_initialize_network_resets_computation() {
    let mut solver = ShortestPathSolver::new(create_diamond());
    solver.compute_shortest_paths(0, QueueStrategy::Linear).unwrap();
    assert!(solver.computation().is_some());

    solver.initialize_network(generate_grid_network(3, 3).unwrap());
    assert!(solver.computation().is_none());
    assert_eq!(solver.graph().node_count(), 9);
}

// Test the boolean flag of the routing interface
#[test]
fn test_strategy_from_heap_flag() {
    assert_eq!(QueueStrategy::from_heap_flag(true), QueueStrategy::BinaryHeap);
    assert_eq!(QueueStrategy::from_heap_flag(false), QueueStrategy::Linear);
    assert_eq!(QueueStrategy::default(), QueueStrategy::Linear);
}

// Test that the queue hands out every node exactly once, reachable or not
#[test]
fn test_extraction_count_covers_every_node() {
    for strategy in STRATEGIES {
        let mut solver = ShortestPathSolver::new(create_diamond());
        solver.compute_shortest_paths(0, strategy).unwrap();

        let computation = solver.computation().unwrap();
        assert_eq!(computation.extractions(), 5, "{} queue should extract all 5 nodes", strategy);
        assert_eq!(computation.tables().reachable_count(), 4);

        let graph = generate_random_network(150, 2, 21).unwrap();
        let mut solver = ShortestPathSolver::new(graph);
        solver.compute_shortest_paths(7, strategy).unwrap();
        assert_eq!(solver.computation().unwrap().extractions(), 150);
    }
}
