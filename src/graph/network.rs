use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Display coordinates of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A directed edge between two nodes of a network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub src: usize,
    pub dest: usize,
    pub length: W,
}

/// A node of the network: its index in the arena, where it is drawn, and
/// its outgoing edges in insertion order
#[derive(Debug, Clone)]
pub struct Node<W> {
    pub id: usize,
    pub location: Point,
    pub edges: Vec<Edge<W>>,
}

/// A directed network stored as an arena of nodes addressed by index
#[derive(Debug, Clone)]
pub struct NetworkGraph<W>
where
    W: Float + Debug,
{
    nodes: Vec<Node<W>>,
}

impl<W> NetworkGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty network
    pub fn new() -> Self {
        NetworkGraph { nodes: Vec::new() }
    }

    /// Creates an empty network with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        NetworkGraph {
            nodes: Vec::with_capacity(nodes),
        }
    }

    /// Read-only view of the node arena
    pub fn nodes(&self) -> &[Node<W>] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&Node<W>> {
        self.nodes.get(id)
    }
}

impl<W> Default for NetworkGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for NetworkGraph<W>
where
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        match self.nodes.get(node) {
            Some(node) => Box::new(node.edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn location(&self, node: usize) -> Point {
        self.nodes.get(node).map(|n| n.location).unwrap_or_default()
    }
}

impl<W> MutableGraph<W> for NetworkGraph<W>
where
    W: Float + Debug,
{
    fn add_node(&mut self, location: Point) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            location,
            edges: Vec::new(),
        });
        id
    }

    fn add_edge(&mut self, from: usize, to: usize, length: W) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::InvalidNode(from));
        }
        if !self.has_node(to) {
            return Err(Error::InvalidNode(to));
        }
        if length.is_nan() || length < W::zero() {
            return Err(Error::NegativeLength(length.to_f64().unwrap_or(f64::NAN)));
        }

        self.nodes[from].edges.push(Edge {
            src: from,
            dest: to,
            length,
        });
        Ok(())
    }
}
