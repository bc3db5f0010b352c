//! Steiner Space Travel library entry points.
//!
//! This crate parses the planet list, builds the complete energy graph over
//! planets and relay stations, plans a closed nearest-neighbour tour, and
//! renders it in the line-oriented output format. Higher-level consumers (the
//! CLI, benchmarks) should only depend on the functions exported here instead
//! of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod judge;
pub mod output;
pub mod path;
pub mod problem;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{
    build_graph, edge_energy, EnergyMatrix, Graph, Node, NodeId, NodeKind, StationLayout,
    DEFAULT_STATIONS, PLANET_ENERGY_FACTOR, STATION_COUNT,
};
pub use judge::{calc_energy, calc_score, check_solution, judge, parse_solution, Judgement};
pub use output::{RouteStep, RouteSummary, Solution, Visit, VisitKind};
pub use path::{all_pairs_shortest, find_path, shortest_path_tree, ShortestPathTree};
pub use problem::{load_problem, Energy, Point, Problem, MAX_COORDINATE, MIN_COORDINATE};
pub use routing::{
    assemble_tour, plan_problem, plan_tour, select_planner, DirectPlanner, ExactPlanner,
    LegPlanner, RoutingMode, Tour, TourRequest, ORIGIN,
};
