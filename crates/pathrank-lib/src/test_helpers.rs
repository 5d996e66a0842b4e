// Test-only helpers for `pathrank-lib` unit tests
#![allow(dead_code)]
use crate::graph::{Graph, Matrix};

/// Four vertices, fully connected:
/// (1,2)=1, (1,3)=4, (1,4)=2, (2,3)=1, (2,4)=5, (3,4)=1.
pub fn sample_matrix() -> Matrix {
    vec![
        vec![0.0, 1.0, 4.0, 2.0],
        vec![1.0, 0.0, 1.0, 5.0],
        vec![4.0, 1.0, 0.0, 1.0],
        vec![2.0, 5.0, 1.0, 0.0],
    ]
}

pub fn sample_graph() -> Graph {
    Graph::from_matrix(sample_matrix()).expect("sample matrix is valid")
}

/// Two components: {1, 2} and {3, 4}.
pub fn split_graph() -> Graph {
    Graph::from_edges(4, &[(1, 2, 3.0), (3, 4, 2.0)]).expect("split graph is valid")
}

/// Complete graph on `n` vertices where edge (i, j) weighs `i + j`.
pub fn complete_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 1..=n {
        for j in (i + 1)..=n {
            edges.push((i, j, (i + j) as f64));
        }
    }
    Graph::from_edges(n, &edges).expect("complete graph is valid")
}
