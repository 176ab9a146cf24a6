use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;

use network_routing::graph::generators::generate_random_network;
use network_routing::{Graph, Length, NetworkGraph, QueueStrategy, ShortestPathSolver};

#[derive(Parser)]
#[clap(author, version, about = "Time the linear and heap queues on random networks", long_about = None)]
struct Args {
    /// Network sizes to run, in nodes
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1_000, 5_000, 10_000, 50_000])]
    sizes: Vec<usize>,

    /// Outgoing edges per node
    #[arg(short, long, default_value_t = 3)]
    degree: usize,

    /// Seed for network generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Check that both queues agree on every distance from this many sources
    #[arg(long, default_value_t = 0)]
    verify_sources: usize,
}

fn time_strategy(graph: &NetworkGraph<Length>, source: usize, strategy: QueueStrategy) -> Duration {
    let mut solver: ShortestPathSolver<Length, _> = ShortestPathSolver::new(graph);
    match solver.compute_shortest_paths(source, strategy) {
        Ok(elapsed) => elapsed,
        Err(err) => {
            warn!("{} queue failed: {}", strategy, err);
            Duration::ZERO
        }
    }
}

/// Number of sources among the first `count` where the two queues disagree on
/// at least one distance
fn count_disagreements(graph: &NetworkGraph<Length>, count: usize) -> usize {
    (0..count.min(graph.node_count()))
        .into_par_iter()
        .filter(|&source| {
            let mut linear: ShortestPathSolver<Length, _> = ShortestPathSolver::new(graph);
            let mut heap: ShortestPathSolver<Length, _> = ShortestPathSolver::new(graph);
            let ran = linear.compute_shortest_paths(source, QueueStrategy::Linear).is_ok()
                && heap.compute_shortest_paths(source, QueueStrategy::BinaryHeap).is_ok();

            match (linear.computation(), heap.computation()) {
                (Some(a), Some(b)) if ran => a.tables().distances() != b.tables().distances(),
                _ => true,
            }
        })
        .count()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("=====================================================");
    println!("Benchmark: linear array queue vs indexed binary heap");
    println!("Out degree: {}, seed: {}", args.degree, args.seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &args.sizes {
        info!("Generating random network with {} nodes...", size);
        let graph = match generate_random_network(size, args.degree, args.seed) {
            Ok(graph) => graph,
            Err(err) => {
                warn!("Skipping size {}: {}", size, err);
                continue;
            }
        };

        let linear_time = time_strategy(&graph, 0, QueueStrategy::Linear);
        let heap_time = time_strategy(&graph, 0, QueueStrategy::BinaryHeap);
        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);

        println!(
            "{} nodes / {} edges: linear {:?}, heap {:?} ({:.2}x)",
            graph.node_count(),
            graph.edge_count(),
            linear_time,
            heap_time,
            speedup
        );

        if args.verify_sources > 0 {
            let disagreements = count_disagreements(&graph, args.verify_sources);
            if disagreements == 0 {
                info!("Queues agree on all distances from {} sources", args.verify_sources.min(size));
            } else {
                warn!("Queues disagree from {} sources", disagreements);
            }
        }

        results.push((size, linear_time, heap_time, speedup));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10}", "Nodes", "Linear (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, linear_time, heap_time, speedup) in &results {
        println!(
            "{:<10} | {:<12.2} | {:<12.2} | {:<10.2}",
            size,
            linear_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
