mod common;

use pathrank_lib::{load_matrix, validate, Error, Graph, GraphStats};

use common::{fixture_graph, fixtures_dir};

#[test]
fn text_and_json_fixtures_describe_the_same_graph() {
    let text = load_matrix(&fixtures_dir().join("four_vertex.txt")).expect("text loads");
    let json = load_matrix(&fixtures_dir().join("four_vertex.json")).expect("json loads");
    assert_eq!(text, json);
    assert!(validate(&text));
}

#[test]
fn asymmetric_fixture_fails_validation() {
    let matrix = load_matrix(&fixtures_dir().join("asymmetric.txt")).expect("fixture loads");
    assert!(!validate(&matrix));

    let err = Graph::from_matrix(matrix).unwrap_err();
    assert!(matches!(err, Error::AsymmetricMatrix { row: 1, column: 3 }));
    assert!(err.is_invalid_matrix());
}

#[test]
fn stats_report_degrees_and_edges() {
    let graph = fixture_graph("hexagon.txt");
    assert_eq!(
        graph.stats(),
        GraphStats {
            vertex_count: 6,
            edge_count: 8,
            degrees: vec![3, 3, 2, 3, 3, 2],
        }
    );
}

#[test]
fn every_degree_counts_connected_vertices() {
    let graph = fixture_graph("four_vertex.txt");
    for vertex in graph.vertices() {
        let connected = graph
            .vertices()
            .filter(|&other| graph.is_connected(vertex, other))
            .count();
        assert_eq!(graph.degree(vertex), connected);
    }
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn zero_entries_mean_no_edge() {
    let graph = fixture_graph("split.txt");
    assert!(graph.is_connected(1, 2));
    assert!(!graph.is_connected(2, 3));
    assert_eq!(graph.edge_weight(3, 4), Some(2.0));
    assert_eq!(graph.edge_weight(1, 3), None);
}
