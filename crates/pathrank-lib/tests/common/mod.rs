//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use pathrank_lib::{load_matrix, Graph};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load and validate a fixture matrix by file name.
#[allow(dead_code)]
pub fn fixture_graph(name: &str) -> Graph {
    let matrix = load_matrix(&fixtures_dir().join(name)).expect("fixture matrix loads");
    Graph::from_matrix(matrix).expect("fixture matrix is valid")
}
