//! Leg planning strategies implementing the Strategy pattern.
//!
//! The tour assembler only needs two answers from a strategy: how expensive
//! the next stop looks from the current one, and which nodes to append when
//! travelling there. [`ExactPlanner`] answers with true shortest paths that may
//! pass through relay stations; [`DirectPlanner`] answers with single hops.

use tracing::debug;

use crate::error::Result;
use crate::graph::{EnergyMatrix, Graph, NodeId};
use crate::path::{all_pairs_shortest, find_path};
use crate::problem::Energy;

use super::RoutingMode;

/// Trait for leg planning strategies used by the tour assembler.
pub trait LegPlanner {
    /// The routing mode implemented by this planner.
    fn mode(&self) -> RoutingMode;

    /// Energy used to rank `to` as the next stop after `from`.
    fn distance(&self, from: NodeId, to: NodeId) -> Energy;

    /// Nodes appended to the route when travelling from `from` to `to`,
    /// excluding `from` and ending with `to`.
    fn leg(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>>;
}

/// Shortest-path planner that may route through relay stations.
///
/// Distances come from a precomputed all-pairs matrix; each leg is
/// reconstructed with a fresh Dijkstra search from its origin.
#[derive(Debug, Clone)]
pub struct ExactPlanner<'a> {
    graph: &'a Graph,
    distances: EnergyMatrix,
}

impl<'a> ExactPlanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let distances = all_pairs_shortest(&graph.cost_matrix());
        Self { graph, distances }
    }

    /// All-pairs shortest energies backing this planner.
    pub fn distances(&self) -> &EnergyMatrix {
        &self.distances
    }
}

impl LegPlanner for ExactPlanner<'_> {
    fn mode(&self) -> RoutingMode {
        RoutingMode::Exact
    }

    fn distance(&self, from: NodeId, to: NodeId) -> Energy {
        self.distances.get(from, to)
    }

    fn leg(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        let path = find_path(self.graph, from, to)?;
        if path.len() > 1 {
            debug!(from, to, hops = path.len(), "leg routed through stations");
        }
        Ok(path)
    }
}

/// Planner that connects consecutive stops with a single direct hop.
#[derive(Debug, Clone, Copy)]
pub struct DirectPlanner<'a> {
    graph: &'a Graph,
}

impl<'a> DirectPlanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl LegPlanner for DirectPlanner<'_> {
    fn mode(&self) -> RoutingMode {
        RoutingMode::Direct
    }

    fn distance(&self, from: NodeId, to: NodeId) -> Energy {
        self.graph.cost(from, to)
    }

    fn leg(&self, _from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        Ok(vec![to])
    }
}

/// Select the planner implementing `mode`.
pub fn select_planner(graph: &Graph, mode: RoutingMode) -> Box<dyn LegPlanner + '_> {
    match mode {
        RoutingMode::Exact => Box::new(ExactPlanner::new(graph)),
        RoutingMode::Direct => Box::new(DirectPlanner::new(graph)),
    }
}
