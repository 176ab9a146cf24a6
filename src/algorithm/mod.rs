pub mod dijkstra;
pub mod path;
pub mod solver;

pub use dijkstra::Dijkstra;
pub use path::{PathEdge, ShortestPath};
pub use solver::{Computation, ShortestPathSolver};
