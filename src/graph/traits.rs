use std::fmt::Debug;
use num_traits::Float;

use crate::graph::network::{Edge, Point};
use crate::Result;

/// Trait representing a weighted directed network as seen by the routing core
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of nodes in the network
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the network
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a node, in insertion order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Returns true if the node exists in the network
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Display coordinates of a node. Opaque to the shortest path computation.
    fn location(&self, node: usize) -> Point;
}

impl<W, G> Graph<W> for &G
where
    W: Float + Debug,
    G: Graph<W> + ?Sized,
{
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        (**self).outgoing_edges(node)
    }

    fn has_node(&self, node: usize) -> bool {
        (**self).has_node(node)
    }

    fn location(&self, node: usize) -> Point {
        (**self).location(node)
    }
}

/// Trait for building a network
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Adds a node at the given location and returns its ID
    fn add_node(&mut self, location: Point) -> usize;

    /// Adds a directed edge between two existing nodes
    fn add_edge(&mut self, from: usize, to: usize, length: W) -> Result<()>;
}
