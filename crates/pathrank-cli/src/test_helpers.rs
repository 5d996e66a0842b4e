// Test utilities used across `pathrank-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use pathrank_lib::{compute_routes_with, Graph, RouteQuery, RouteReport};

/// Four fully connected vertices; the direct edge 1-4 is the minimum.
pub fn sample_graph() -> Graph {
    Graph::from_matrix(vec![
        vec![0.0, 1.0, 4.0, 2.0],
        vec![1.0, 0.0, 1.0, 5.0],
        vec![4.0, 1.0, 0.0, 1.0],
        vec![2.0, 5.0, 1.0, 0.0],
    ])
    .expect("sample matrix is valid")
}

/// Ranking report for vertex 1 to vertex 4 of [`sample_graph`].
pub fn sample_report() -> RouteReport {
    let result =
        compute_routes_with(&sample_graph(), &RouteQuery::new(1, 4)).expect("valid query");
    RouteReport::from_result(&result)
}
