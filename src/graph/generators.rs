use crate::graph::{MutableGraph, NetworkGraph, Point};
use crate::{Length, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Scale applied to unit-square distances so edge lengths read as whole numbers
pub const LENGTH_SCALE: f64 = 100.0;

/// Generates a random planar network with `n` nodes scattered over the unit square.
///
/// Every node gets `min(out_degree, n - 1)` outgoing edges to distinct other nodes,
/// each as long as the Euclidean distance between its endpoints times
/// [`LENGTH_SCALE`]. The same seed always yields the same network.
pub fn generate_random_network(n: usize, out_degree: usize, seed: u64) -> Result<NetworkGraph<Length>> {
    let mut graph = NetworkGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..n {
        let x = rng.gen_range(0.0..1.0);
        let y = rng.gen_range(0.0..1.0);
        graph.add_node(Point::new(x, y));
    }

    let degree = out_degree.min(n.saturating_sub(1));
    let points: Vec<Point> = graph.nodes().iter().map(|node| node.location).collect();

    for src in 0..n {
        let mut targets = HashSet::with_capacity(degree);
        while targets.len() < degree {
            let dest = rng.gen_range(0..n);
            if dest != src && targets.insert(dest) {
                let length = points[src].distance_to(&points[dest]) * LENGTH_SCALE;
                graph.add_edge(src, dest, OrderedFloat(length))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with unit-length edges between
/// horizontally and vertically adjacent nodes, in both directions.
pub fn generate_grid_network(width: usize, height: usize) -> Result<NetworkGraph<Length>> {
    let mut graph = NetworkGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(Point::new(x as f64, y as f64));
        }
    }

    let index = |x: usize, y: usize| y * width + x;
    let unit = OrderedFloat(1.0);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(current, index(x - 1, y), unit)?;
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), unit)?;
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), unit)?;
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), unit)?;
            }
        }
    }

    Ok(graph)
}
