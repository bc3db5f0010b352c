use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::problem::{Energy, Point};

/// Index of a node within the routing graph: planets first, then stations.
pub type NodeId = usize;

/// Number of relay stations placed on every map.
pub const STATION_COUNT: usize = 8;

/// Energy multiplier applied once per planet endpoint of an edge.
pub const PLANET_ENERGY_FACTOR: Energy = 5;

/// Default relay constellation: a 3x3 grid around the map centre with the
/// centre cell left empty.
pub const DEFAULT_STATIONS: [Point; STATION_COUNT] = [
    Point::new(300, 300),
    Point::new(300, 500),
    Point::new(300, 700),
    Point::new(500, 300),
    Point::new(500, 700),
    Point::new(700, 300),
    Point::new(700, 500),
    Point::new(700, 700),
];

/// Classification for a node in the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Planet,
    Station,
}

impl NodeKind {
    fn energy_factor(self) -> Energy {
        match self {
            NodeKind::Planet => PLANET_ENERGY_FACTOR,
            NodeKind::Station => 1,
        }
    }
}

/// Node within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    pub kind: NodeKind,
}

/// Positions of the relay stations, in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationLayout {
    positions: [Point; STATION_COUNT],
}

impl StationLayout {
    pub fn new(positions: [Point; STATION_COUNT]) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Point; STATION_COUNT] {
        &self.positions
    }
}

impl Default for StationLayout {
    fn default() -> Self {
        Self::new(DEFAULT_STATIONS)
    }
}

/// Dense square matrix of energies indexed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyMatrix {
    size: usize,
    values: Vec<Energy>,
}

impl EnergyMatrix {
    /// Build a matrix by evaluating `f` for every ordered pair.
    pub fn from_fn(size: usize, mut f: impl FnMut(NodeId, NodeId) -> Energy) -> Self {
        let mut values = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                values.push(f(i, j));
            }
        }
        Self { size, values }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: NodeId, j: NodeId) -> Energy {
        self.values[i * self.size + j]
    }

    pub fn set(&mut self, i: NodeId, j: NodeId, value: Energy) {
        self.values[i * self.size + j] = value;
    }

    /// Borrow a full row, i.e. every energy leaving node `i`.
    pub fn row(&self, i: NodeId) -> &[Energy] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

/// Complete graph over the planets and relay stations.
#[derive(Debug, Clone)]
pub struct Graph {
    planet_count: usize,
    nodes: Arc<Vec<Node>>,
}

impl Graph {
    /// Total number of nodes (planets plus stations).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A built graph always has at least one planet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn planet_count(&self) -> usize {
        self.planet_count
    }

    pub fn station_count(&self) -> usize {
        self.nodes.len() - self.planet_count
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Planet nodes in input order.
    pub fn planets(&self) -> &[Node] {
        &self.nodes[..self.planet_count]
    }

    /// Station nodes in layout order.
    pub fn stations(&self) -> &[Node] {
        &self.nodes[self.planet_count..]
    }

    pub fn is_planet(&self, id: NodeId) -> bool {
        id < self.planet_count
    }

    /// Energy spent travelling directly between two nodes.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Energy {
        let a = &self.nodes[from];
        let b = &self.nodes[to];
        edge_energy(a.position, a.kind, b.position, b.kind)
    }

    /// Materialise the direct cost of every node pair.
    pub fn cost_matrix(&self) -> EnergyMatrix {
        EnergyMatrix::from_fn(self.len(), |i, j| self.cost(i, j))
    }

    /// Sum of direct costs along consecutive entries of `route`.
    pub fn route_energy(&self, route: &[NodeId]) -> Energy {
        route
            .windows(2)
            .map(|pair| self.cost(pair[0], pair[1]))
            .sum()
    }
}

/// Energy of a single hop between two positioned endpoints.
///
/// Squared Euclidean distance, multiplied by [`PLANET_ENERGY_FACTOR`] for each
/// endpoint that is a planet.
pub fn edge_energy(from: Point, from_kind: NodeKind, to: Point, to_kind: NodeKind) -> Energy {
    from.dist_sq(&to) * from_kind.energy_factor() * to_kind.energy_factor()
}

/// Build the routing graph from planet coordinates and a station layout.
pub fn build_graph(planets: &[Point], layout: &StationLayout) -> Result<Graph> {
    if planets.is_empty() {
        return Err(Error::invalid_input(
            "at least one planet is required to plan a tour",
        ));
    }

    let planet_nodes = planets.iter().map(|&position| (position, NodeKind::Planet));
    let station_nodes = layout
        .positions()
        .iter()
        .map(|&position| (position, NodeKind::Station));

    let nodes: Vec<Node> = planet_nodes
        .chain(station_nodes)
        .enumerate()
        .map(|(id, (position, kind))| Node { id, position, kind })
        .collect();

    debug!(
        planets = planets.len(),
        stations = STATION_COUNT,
        "built routing graph"
    );

    Ok(Graph {
        planet_count: planets.len(),
        nodes: Arc::new(nodes),
    })
}
