pub mod traits;
pub mod network;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use network::{Edge, NetworkGraph, Node, Point};
