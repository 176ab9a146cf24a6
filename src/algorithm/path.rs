use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{Edge, Graph, Point};

/// One hop of a reconstructed path
#[derive(Debug, Clone, PartialEq)]
pub struct PathEdge<W> {
    pub from: usize,
    pub to: usize,
    pub source_location: Point,
    pub dest_location: Point,
    pub length: W,
    /// Length rendered with zero decimal places
    pub label: String,
}

impl<W> PathEdge<W>
where
    W: Float + Debug,
{
    pub(crate) fn from_edge<G>(graph: &G, edge: &Edge<W>) -> Self
    where
        G: Graph<W> + ?Sized,
    {
        PathEdge {
            from: edge.src,
            to: edge.dest,
            source_location: graph.location(edge.src),
            dest_location: graph.location(edge.dest),
            length: edge.length,
            label: format_length(edge.length),
        }
    }
}

/// Path from the source to a destination together with its total length.
///
/// An unreachable destination is reported as cost zero with no edges, the
/// same shape as the trivial path from the source to itself. Use
/// [`ShortestPathSolver::is_reachable`](crate::ShortestPathSolver::is_reachable)
/// to tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W> {
    pub cost: W,
    /// Edges ordered from the source towards the destination
    pub path: Vec<PathEdge<W>>,
}

impl<W> ShortestPath<W>
where
    W: Float + Debug,
{
    pub fn unreachable() -> Self {
        ShortestPath {
            cost: W::zero(),
            path: Vec::new(),
        }
    }

    /// Node IDs visited by the path, starting at its first edge's tail
    pub fn nodes(&self) -> Vec<usize> {
        let mut nodes = Vec::with_capacity(self.path.len() + 1);
        if let Some(first) = self.path.first() {
            nodes.push(first.from);
        }
        nodes.extend(self.path.iter().map(|edge| edge.to));
        nodes
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

pub(crate) fn format_length<W: Float>(length: W) -> String {
    format!("{:.0}", length.to_f64().unwrap_or(f64::NAN))
}
