mod common;

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use pathrank_lib::enumerate::{is_connected_path, permutation_paths, select_enumerator};
use pathrank_lib::{all_simple_paths, EnumerationStrategy, Error, Graph, SearchLimits};

use common::fixture_graph;

const STRATEGIES: [EnumerationStrategy; 3] = [
    EnumerationStrategy::Backtracking,
    EnumerationStrategy::Permutation,
    EnumerationStrategy::Parallel,
];

fn complete_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 1..=n {
        for j in (i + 1)..=n {
            edges.push((i, j, 1.0));
        }
    }
    Graph::from_edges(n, &edges).expect("complete graph is valid")
}

#[test]
fn every_path_is_simple_and_connected() {
    let graph = fixture_graph("hexagon.txt");
    for start in graph.vertices() {
        for end in graph.vertices().filter(|&end| end != start) {
            let paths = all_simple_paths(&graph, start, end).expect("valid endpoints");
            for path in &paths {
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert!(path.len() >= 2);
                assert!(is_connected_path(&graph, path), "{path:?} is not a path");
            }
            let distinct: HashSet<_> = paths.iter().collect();
            assert_eq!(distinct.len(), paths.len(), "duplicate paths {start}->{end}");
        }
    }
}

#[test]
fn strategies_agree_on_every_pair() {
    let graph = fixture_graph("hexagon.txt");
    let limits = SearchLimits::unbounded();
    for start in graph.vertices() {
        for end in graph.vertices().filter(|&end| end != start) {
            let mut expected = all_simple_paths(&graph, start, end).expect("valid");
            expected.sort();
            for strategy in STRATEGIES {
                let mut paths = select_enumerator(strategy)
                    .enumerate(&graph, start, end, &limits)
                    .expect("valid");
                paths.sort();
                assert_eq!(paths, expected, "{strategy} disagrees on {start}->{end}");
            }
        }
    }
}

#[test]
fn complete_graph_path_count_is_sum_of_partial_permutations() {
    // Σₖ P(5, k) for k = 0..=5: 1 + 5 + 20 + 60 + 120 + 120
    let graph = complete_graph(7);
    let paths = all_simple_paths(&graph, 1, 7).expect("valid endpoints");
    assert_eq!(paths.len(), 326);
}

#[test]
fn hexagon_paths_between_opposite_corners() {
    let graph = fixture_graph("hexagon.txt");
    let paths = all_simple_paths(&graph, 1, 4).expect("valid endpoints");
    assert_eq!(
        paths,
        vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 5, 4],
            vec![1, 4],
            vec![1, 6, 5, 2, 3, 4],
            vec![1, 6, 5, 4],
        ]
    );
}

#[test]
fn disconnected_components_yield_empty_set_for_every_strategy() {
    let graph = fixture_graph("split.txt");
    for strategy in STRATEGIES {
        let paths = select_enumerator(strategy)
            .enumerate(&graph, 2, 3, &SearchLimits::unbounded())
            .expect("valid endpoints");
        assert!(paths.is_empty(), "{strategy} found a path");
    }
}

#[test]
fn invalid_vertices_are_rejected_by_every_strategy() {
    let graph = fixture_graph("four_vertex.txt");
    for strategy in STRATEGIES {
        let enumerator = select_enumerator(strategy);
        let limits = SearchLimits::unbounded();
        for (start, end) in [(0, 1), (1, 5), (2, 2)] {
            let err = enumerator.enumerate(&graph, start, end, &limits).unwrap_err();
            assert!(err.is_invalid_vertex(), "{strategy}: {err}");
        }
    }
}

#[test]
fn cancellation_flag_stops_permutation_search() {
    let flag = Arc::new(AtomicBool::new(true));
    let limits = SearchLimits::unbounded().with_cancel_flag(flag);
    let err = permutation_paths(&complete_graph(6), 1, 6, &limits).unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn generous_deadline_does_not_interfere() {
    let limits = SearchLimits::unbounded().with_timeout(Duration::from_secs(60));
    let paths = select_enumerator(EnumerationStrategy::Parallel)
        .enumerate(&complete_graph(6), 1, 6, &limits)
        .expect("finishes within deadline");
    assert_eq!(paths.len(), 65);
}
