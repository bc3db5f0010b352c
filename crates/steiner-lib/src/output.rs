use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeKind};
use crate::judge::calc_score;
use crate::problem::{Energy, Point};
use crate::routing::{RoutingMode, Tour};

/// Kind of an entry in the emitted route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitKind {
    Planet,
    Station,
}

impl VisitKind {
    /// Numeric tag used by the text format.
    pub fn code(self) -> u8 {
        match self {
            VisitKind::Planet => 1,
            VisitKind::Station => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(VisitKind::Planet),
            2 => Some(VisitKind::Station),
            _ => None,
        }
    }
}

impl From<NodeKind> for VisitKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Planet => VisitKind::Planet,
            NodeKind::Station => VisitKind::Station,
        }
    }
}

/// One route entry: a planet or station referenced by its 0-based index
/// within its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub kind: VisitKind,
    pub index: usize,
}

impl Visit {
    pub fn planet(index: usize) -> Self {
        Self {
            kind: VisitKind::Planet,
            index,
        }
    }

    pub fn station(index: usize) -> Self {
        Self {
            kind: VisitKind::Station,
            index,
        }
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.code(), self.index + 1)
    }
}

/// Station placement plus route: the planner's output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub stations: Vec<Point>,
    pub visits: Vec<Visit>,
}

impl Solution {
    /// Translate a planned tour into planet/station visits.
    pub fn from_tour(graph: &Graph, tour: &Tour) -> Result<Self> {
        if tour.route.is_empty() {
            return Err(Error::invalid_solution("route was empty"));
        }

        let planet_count = graph.planet_count();
        let visits = tour
            .route
            .iter()
            .map(|&id| {
                if graph.is_planet(id) {
                    Visit::planet(id)
                } else {
                    Visit::station(id - planet_count)
                }
            })
            .collect();

        Ok(Self {
            stations: graph.stations().iter().map(|node| node.position).collect(),
            visits,
        })
    }

    /// Write the line-oriented text format.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Render the line-oriented text format into a string.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for station in &self.stations {
            writeln!(f, "{} {}", station.x, station.y)?;
        }
        writeln!(f, "{}", self.visits.len())?;
        for visit in &self.visits {
            writeln!(f, "{visit}")?;
        }
        Ok(())
    }
}

/// Route entry in a [`RouteSummary`], with 1-based indices as in the text
/// format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub kind: VisitKind,
    pub index: usize,
    pub x: i64,
    pub y: i64,
}

/// Structured representation of a planned tour that higher-level consumers can
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub mode: RoutingMode,
    pub planets: usize,
    pub stations: Vec<Point>,
    pub hops: usize,
    pub energy: Energy,
    pub score: i64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    pub fn from_tour(graph: &Graph, tour: &Tour) -> Result<Self> {
        let solution = Solution::from_tour(graph, tour)?;
        let steps = tour
            .route
            .iter()
            .zip(&solution.visits)
            .map(|(&id, visit)| {
                let position = graph.node(id).position;
                RouteStep {
                    kind: visit.kind,
                    index: visit.index + 1,
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();

        Ok(Self {
            mode: tour.mode,
            planets: graph.planet_count(),
            stations: solution.stations,
            hops: tour.hop_count(),
            energy: tour.energy,
            score: calc_score(tour.energy),
            steps,
        })
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
