use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EnergyMatrix, Graph, NodeId};
use crate::problem::Energy;

/// Compute the cheapest energy between every pair of nodes (Floyd-Warshall).
///
/// The intermediate node loop is outermost, so when `k` is processed every
/// `dist[i][j]` already reflects paths through intermediates `0..k`.
pub fn all_pairs_shortest(costs: &EnergyMatrix) -> EnergyMatrix {
    let size = costs.size();
    let mut dist = costs.clone();
    for i in 0..size {
        dist.set(i, i, 0);
    }

    for k in 0..size {
        for i in 0..size {
            let via = dist.get(i, k);
            for j in 0..size {
                let candidate = via + dist.get(k, j);
                if candidate < dist.get(i, j) {
                    dist.set(i, j, candidate);
                }
            }
        }
    }

    debug!(nodes = size, "computed all-pairs shortest energies");
    dist
}

/// Result of a single-source shortest path search.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Option<Energy>>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Cheapest energy from the source to `target`, if it was reached.
    pub fn distance(&self, target: NodeId) -> Option<Energy> {
        self.distances.get(target).copied().flatten()
    }

    /// Node preceding `target` on its shortest path. `None` for the source and
    /// for unreached nodes.
    pub fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        self.predecessors.get(target).copied().flatten()
    }

    /// Nodes visited after leaving the source, ending with `target`.
    ///
    /// A target equal to the source yields `[source]`, a zero-energy self hop.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if target == self.source {
            return Ok(vec![target]);
        }
        let unreachable = || Error::UnreachableTarget {
            start: self.source,
            goal: target,
        };
        if self.distance(target).is_none() {
            return Err(unreachable());
        }

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            if path.len() >= self.predecessors.len() {
                return Err(unreachable());
            }
            path.push(current);
            current = self.predecessor(current).ok_or_else(unreachable)?;
        }
        path.reverse();
        Ok(path)
    }
}

/// Run Dijkstra's algorithm from `source` over the complete graph.
///
/// Neighbours are scanned in ascending id order and only a strictly cheaper
/// relaxation replaces a predecessor, so equal-cost ties keep the first path
/// found. Improved entries are re-queued and stale ones skipped on pop.
pub fn shortest_path_tree(graph: &Graph, source: NodeId) -> ShortestPathTree {
    let size = graph.len();
    let mut distances: Vec<Option<Energy>> = vec![None; size];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; size];
    let mut queue = BinaryHeap::new();

    distances[source] = Some(0);
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        match distances[entry.node] {
            Some(best) if entry.cost > best => continue,
            _ => {}
        }

        for next in 0..size {
            let next_cost = entry.cost + graph.cost(entry.node, next);
            let improves = match distances[next] {
                Some(known) => next_cost < known,
                None => true,
            };
            if improves {
                distances[next] = Some(next_cost);
                predecessors[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        predecessors,
    }
}

/// Find the cheapest path from `start` to `goal`, excluding `start`.
pub fn find_path(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    shortest_path_tree(graph, start).path_to(goal)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: Energy,
}

impl QueueEntry {
    fn new(node: NodeId, cost: Energy) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by (cost, node).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, StationLayout};
    use crate::problem::Point;

    fn graph_with_midpoint_station() -> Graph {
        let mut positions = [Point::new(1000, 1000); 8];
        positions[0] = Point::new(500, 0);
        build_graph(
            &[Point::new(0, 0), Point::new(1000, 0)],
            &StationLayout::new(positions),
        )
        .expect("graph builds")
    }

    #[test]
    fn queue_pops_cheapest_then_lowest_id() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(3, 10));
        queue.push(QueueEntry::new(1, 10));
        queue.push(QueueEntry::new(2, 5));
        assert_eq!(queue.pop(), Some(QueueEntry::new(2, 5)));
        assert_eq!(queue.pop(), Some(QueueEntry::new(1, 10)));
        assert_eq!(queue.pop(), Some(QueueEntry::new(3, 10)));
    }

    #[test]
    fn floyd_warshall_routes_through_cheaper_intermediate() {
        // 0 -> 2 direct is 100, 0 -> 1 -> 2 is 2.
        let costs = EnergyMatrix::from_fn(3, |i, j| match (i.min(j), i.max(j)) {
            (0, 1) | (1, 2) => 1,
            (0, 2) => 100,
            _ => 0,
        });
        let dist = all_pairs_shortest(&costs);
        assert_eq!(dist.get(0, 2), 2);
        assert_eq!(dist.get(2, 0), 2);
        assert_eq!(dist.get(0, 1), 1);
    }

    #[test]
    fn dijkstra_detours_through_station() {
        let graph = graph_with_midpoint_station();
        let tree = shortest_path_tree(&graph, 0);

        // direct: 1_000_000 * 25; via station: 2 * 250_000 * 5
        assert_eq!(tree.distance(1), Some(2_500_000));
        assert_eq!(tree.path_to(1).expect("reachable"), vec![2, 1]);
        assert_eq!(tree.predecessor(1), Some(2));
        assert_eq!(tree.predecessor(0), None);
    }

    #[test]
    fn path_to_source_is_self_hop() {
        let graph = graph_with_midpoint_station();
        assert_eq!(find_path(&graph, 1, 1).expect("trivial"), vec![1]);
    }

    #[test]
    fn missing_predecessor_reports_unreachable() {
        let tree = ShortestPathTree {
            source: 0,
            distances: vec![Some(0), None],
            predecessors: vec![None, None],
        };
        let error = tree.path_to(1).expect_err("unreached");
        assert!(matches!(
            error,
            Error::UnreachableTarget { start: 0, goal: 1 }
        ));
    }

    #[test]
    fn dijkstra_agrees_with_floyd_warshall() {
        let graph = build_graph(
            &[
                Point::new(100, 120),
                Point::new(880, 910),
                Point::new(450, 520),
                Point::new(20, 990),
            ],
            &StationLayout::default(),
        )
        .expect("graph builds");
        let dist = all_pairs_shortest(&graph.cost_matrix());

        for source in 0..graph.len() {
            let tree = shortest_path_tree(&graph, source);
            for target in 0..graph.len() {
                assert_eq!(tree.distance(target), Some(dist.get(source, target)));
            }
        }
    }
}
