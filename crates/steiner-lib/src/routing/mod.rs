//! Tour planning module for the Steiner route planner.
//!
//! This module provides:
//! - [`RoutingMode`] - Exact shortest-path legs or direct single hops
//! - [`TourRequest`] - High-level tour planning request
//! - [`Tour`] - Planned tour result
//! - [`plan_tour`] - Nearest-neighbour tour assembly over a built graph
//! - [`plan_problem`] - Build the graph for a problem and plan its tour
//!
//! # Strategy Pattern
//!
//! The assembler loop is shared by both modes; the [`LegPlanner`] trait
//! decides how candidates are ranked and how each leg is materialised.
//!
//! # Example
//!
//! ```
//! use steiner_lib::{plan_problem, Problem, TourRequest};
//!
//! let problem = Problem::parse("2 8\n0 0\n1000 1000\n")?;
//! let (_graph, tour) = plan_problem(&problem, &TourRequest::direct())?;
//! assert_eq!(tour.route, vec![0, 1, 0]);
//! # Ok::<(), steiner_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, DirectPlanner, ExactPlanner, LegPlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, NodeId, StationLayout, STATION_COUNT};
use crate::problem::{Energy, Problem};

/// Planet every tour starts from and returns to.
pub const ORIGIN: NodeId = 0;

/// Supported routing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Shortest-path legs, possibly passing through relay stations.
    #[default]
    Exact,
    /// Direct planet-to-planet hops that ignore the stations.
    Direct,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoutingMode::Exact => "exact",
            RoutingMode::Direct => "direct",
        };
        f.write_str(value)
    }
}

/// High-level tour planning request.
#[derive(Debug, Clone, Default)]
pub struct TourRequest {
    pub mode: RoutingMode,
    pub layout: StationLayout,
}

impl TourRequest {
    /// Exact routing over the default station layout.
    pub fn exact() -> Self {
        Self {
            mode: RoutingMode::Exact,
            layout: StationLayout::default(),
        }
    }

    /// Direct routing over the default station layout.
    pub fn direct() -> Self {
        Self {
            mode: RoutingMode::Direct,
            layout: StationLayout::default(),
        }
    }
}

/// Closed tour returned by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub mode: RoutingMode,
    /// Node ids in travel order, starting and ending at [`ORIGIN`]. In exact
    /// mode legs may pass through stations or other planets on the way.
    pub route: Vec<NodeId>,
    /// Planets in the order they were chosen as stops, closed by [`ORIGIN`].
    pub stops: Vec<NodeId>,
    /// Total energy spent along the route.
    pub energy: Energy,
}

impl Tour {
    /// Number of route entries, including both visits to the origin.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Number of hops travelled.
    pub fn hop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Assemble a nearest-neighbour tour using the strategy selected by `mode`.
pub fn plan_tour(graph: &Graph, mode: RoutingMode) -> Result<Tour> {
    let planner = select_planner(graph, mode);
    assemble_tour(graph, planner.as_ref())
}

/// Build the routing graph for `problem` and plan its tour.
///
/// The emitted solution always lists the fixed layout, so the input must
/// announce exactly [`STATION_COUNT`] stations.
pub fn plan_problem(problem: &Problem, request: &TourRequest) -> Result<(Graph, Tour)> {
    if problem.station_hint != STATION_COUNT {
        return Err(Error::invalid_input(format!(
            "input announces {} stations but the layout places {STATION_COUNT}",
            problem.station_hint
        )));
    }
    let graph = build_graph(&problem.planets, &request.layout)?;
    let tour = plan_tour(&graph, request.mode)?;
    Ok((graph, tour))
}

/// Nearest-neighbour tour assembly shared by every [`LegPlanner`].
///
/// From the current planet the cheapest unvisited planet (by the planner's
/// distance, lowest id on ties) becomes the next stop and the planner's leg is
/// appended. A final leg returns to [`ORIGIN`].
pub fn assemble_tour(graph: &Graph, planner: &dyn LegPlanner) -> Result<Tour> {
    let planet_count = graph.planet_count();
    if planet_count == 0 {
        return Err(Error::invalid_input(
            "at least one planet is required to plan a tour",
        ));
    }

    let mut visited = vec![false; planet_count];
    let mut route = vec![ORIGIN];
    let mut stops = vec![ORIGIN];
    let mut current = ORIGIN;
    visited[ORIGIN] = true;

    for _ in 1..planet_count {
        let Some(next) = (0..planet_count)
            .filter(|&candidate| !visited[candidate])
            .min_by_key(|&candidate| planner.distance(current, candidate))
        else {
            break;
        };

        route.extend(planner.leg(current, next)?);
        stops.push(next);
        visited[next] = true;
        current = next;
    }

    route.extend(planner.leg(current, ORIGIN)?);
    stops.push(ORIGIN);

    let energy = graph.route_energy(&route);
    debug!(
        mode = %planner.mode(),
        entries = route.len(),
        energy,
        "assembled tour"
    );

    Ok(Tour {
        mode: planner.mode(),
        route,
        stops,
        energy,
    })
}
