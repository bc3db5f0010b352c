mod common;

use steiner_lib::{all_pairs_shortest, shortest_path_tree, NodeKind, STATION_COUNT};

use common::sample_graph;

#[test]
fn sample_graph_has_planets_then_stations() {
    let graph = sample_graph();
    assert_eq!(graph.planet_count(), 40);
    assert_eq!(graph.len(), 40 + STATION_COUNT);
    assert_eq!(graph.node(39).kind, NodeKind::Planet);
    assert_eq!(graph.node(40).kind, NodeKind::Station);
}

#[test]
fn distances_are_symmetric_and_dominated_by_costs() {
    let graph = sample_graph();
    let costs = graph.cost_matrix();
    let dist = all_pairs_shortest(&costs);

    for i in 0..graph.len() {
        assert_eq!(dist.get(i, i), 0);
        for j in 0..graph.len() {
            assert_eq!(dist.get(i, j), dist.get(j, i), "asymmetric at ({i}, {j})");
            assert!(dist.get(i, j) <= costs.get(i, j));
        }
    }
}

#[test]
fn distances_satisfy_triangle_inequality() {
    let graph = sample_graph();
    let dist = all_pairs_shortest(&graph.cost_matrix());

    for i in 0..graph.len() {
        for j in 0..graph.len() {
            for k in 0..graph.len() {
                assert!(
                    dist.get(i, j) <= dist.get(i, k) + dist.get(k, j),
                    "triangle violated for ({i}, {j}) via {k}"
                );
            }
        }
    }
}

#[test]
fn reconstructed_paths_cost_their_distance() {
    let graph = sample_graph();
    let dist = all_pairs_shortest(&graph.cost_matrix());

    for source in [0, 7, 19, 39, 40, 47] {
        let tree = shortest_path_tree(&graph, source);
        for target in 0..graph.len() {
            let mut route = vec![source];
            route.extend(tree.path_to(target).expect("complete graph"));
            assert_eq!(route.last(), Some(&target));
            assert_eq!(
                graph.route_energy(&route),
                dist.get(source, target),
                "path {source} -> {target} does not cost its distance"
            );
        }
    }
}

#[test]
fn dijkstra_is_deterministic() {
    let graph = sample_graph();
    for source in [0, 12, 44] {
        let first = shortest_path_tree(&graph, source);
        let second = shortest_path_tree(&graph, source);
        for target in 0..graph.len() {
            assert_eq!(first.predecessor(target), second.predecessor(target));
            assert_eq!(first.distance(target), second.distance(target));
        }
    }
}
