//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use steiner_lib::{build_graph, load_problem, Graph, Point, Problem, StationLayout};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the 40-planet sample problem.
#[allow(dead_code)]
pub fn sample_problem() -> Problem {
    load_problem(&fixtures_dir().join("sample_input.txt")).expect("fixture loads")
}

/// Build the routing graph for the sample problem with the default stations.
#[allow(dead_code)]
pub fn sample_graph() -> Graph {
    build_graph(&sample_problem().planets, &StationLayout::default()).expect("graph builds")
}

/// Build a graph from raw coordinates with the default stations.
#[allow(dead_code)]
pub fn graph_of(points: &[(i64, i64)]) -> Graph {
    let planets: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    build_graph(&planets, &StationLayout::default()).expect("graph builds")
}
