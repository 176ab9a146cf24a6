use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::{Duration, Instant};

use log::{debug, warn};
use num_traits::Float;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path::{PathEdge, ShortestPath};
use crate::data_structures::{QueueStrategy, SearchTables};
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Outcome of one shortest path computation
#[derive(Debug, Clone)]
pub struct Computation<W>
where
    W: Float + Debug,
{
    strategy: QueueStrategy,
    tables: SearchTables<W>,
    elapsed: Duration,
    extractions: usize,
}

impl<W> Computation<W>
where
    W: Float + Debug,
{
    pub fn source(&self) -> usize {
        self.tables.source()
    }

    pub fn strategy(&self) -> QueueStrategy {
        self.strategy
    }

    pub fn tables(&self) -> &SearchTables<W> {
        &self.tables
    }

    /// Wall-clock time spent in the extract/relax loop
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of nodes taken off the queue. Every node is extracted once,
    /// reachable or not. Restored tables report zero.
    pub fn extractions(&self) -> usize {
        self.extractions
    }
}

/// Runs Dijkstra over a network and answers path queries against the last run.
///
/// The solver is idle until [`compute_shortest_paths`](Self::compute_shortest_paths)
/// succeeds; every later run replaces the previous [`Computation`] wholesale.
#[derive(Debug)]
pub struct ShortestPathSolver<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    graph: G,
    computation: Option<Computation<W>>,
}

impl<W, G> ShortestPathSolver<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    pub fn new(graph: G) -> Self {
        ShortestPathSolver {
            graph,
            computation: None,
        }
    }

    /// Swaps in a new network and drops any previous computation
    pub fn initialize_network(&mut self, graph: G) {
        self.graph = graph;
        self.computation = None;
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The last successful computation, if any
    pub fn computation(&self) -> Option<&Computation<W>> {
        self.computation.as_ref()
    }

    /// Computes shortest paths from `source` using `strategy` and returns how
    /// long the run took.
    pub fn compute_shortest_paths(&mut self, source: usize, strategy: QueueStrategy) -> Result<Duration> {
        self.computation = None;

        let start = Instant::now();
        let (tables, extractions) = Dijkstra::new(strategy).run(&self.graph, source)?;
        let elapsed = start.elapsed();

        debug!(
            "{} queue from node {}: {} of {} nodes reachable in {:?}",
            strategy,
            source,
            tables.reachable_count(),
            tables.len(),
            elapsed
        );

        self.computation = Some(Computation {
            strategy,
            tables,
            elapsed,
            extractions,
        });

        Ok(elapsed)
    }

    /// Installs tables produced elsewhere, e.g. by an earlier run that was
    /// serialized, in place of the current computation.
    pub fn restore_computation(&mut self, strategy: QueueStrategy, tables: SearchTables<W>) -> Result<()> {
        self.adopt_computation(Computation {
            strategy,
            tables,
            elapsed: Duration::ZERO,
            extractions: 0,
        })
    }

    /// Installs a computation made by another solver over the same network
    pub fn adopt_computation(&mut self, computation: Computation<W>) -> Result<()> {
        let tables = &computation.tables;
        let node_count = self.graph.node_count();

        if tables.len() != node_count || tables.predecessors().len() != node_count {
            return Err(Error::TableSizeMismatch {
                expected: node_count,
                actual: tables.len().min(tables.predecessors().len()),
            });
        }
        if tables.source() >= node_count {
            return Err(Error::InvalidNode(tables.source()));
        }

        self.computation = Some(computation);
        Ok(())
    }

    /// Consumes the solver, keeping only its last computation
    pub fn into_computation(self) -> Option<Computation<W>> {
        self.computation
    }

    /// Shortest distance from the source to `destination`, `None` when it is
    /// unreachable
    pub fn distance(&self, destination: usize) -> Result<Option<W>> {
        let tables = self.ready_tables(destination)?;
        let distance = tables.distance(destination);
        Ok(if distance.is_finite() { Some(distance) } else { None })
    }

    pub fn is_reachable(&self, destination: usize) -> Result<bool> {
        Ok(self.distance(destination)?.is_some())
    }

    /// Rebuilds the path from the source to `destination` by walking the
    /// predecessor table backwards.
    ///
    /// An unreachable destination yields cost zero and an empty path. A
    /// predecessor chain that stops short of the source yields an infinite
    /// cost with the edges walked so far.
    pub fn get_shortest_path(&self, destination: usize) -> Result<ShortestPath<W>> {
        let tables = self.ready_tables(destination)?;

        if tables.distance(destination).is_infinite() {
            return Ok(ShortestPath::unreachable());
        }

        let mut path = Vec::new();
        let mut cost = W::zero();
        let mut current = destination;

        while current != tables.source() {
            if path.len() >= tables.len() {
                warn!("Predecessor chain from node {} never reaches the source", destination);
                return Err(Error::PredecessorCycle(destination));
            }

            let previous = match tables.predecessor(current) {
                Some(previous) => previous,
                None => {
                    warn!("Node {} has no predecessor but is not the source", current);
                    path.reverse();
                    return Ok(ShortestPath {
                        cost: W::infinity(),
                        path,
                    });
                }
            };

            let edge = self
                .connecting_edge(previous, current)
                .ok_or(Error::Reconstruction {
                    from: previous,
                    to: current,
                })?;

            cost = cost + edge.length;
            path.push(PathEdge::from_edge(&self.graph, &edge));
            current = previous;
        }

        path.reverse();

        Ok(ShortestPath { cost, path })
    }

    fn ready_tables(&self, destination: usize) -> Result<&SearchTables<W>> {
        let computation = self.computation.as_ref().ok_or(Error::NotComputed)?;
        if destination >= computation.tables.len() {
            return Err(Error::InvalidNode(destination));
        }
        Ok(&computation.tables)
    }

    /// Shortest of the edges leaving `from` that land on `to`
    fn connecting_edge(&self, from: usize, to: usize) -> Option<Edge<W>> {
        self.graph
            .outgoing_edges(from)
            .filter(|edge| edge.dest == to)
            .min_by(|a, b| a.length.partial_cmp(&b.length).unwrap_or(Ordering::Equal))
    }
}
