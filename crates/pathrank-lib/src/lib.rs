//! pathrank library entry points.
//!
//! This crate validates adjacency matrices of small weighted undirected
//! graphs, enumerates every simple path between two vertices, weighs and
//! ranks those paths, and reports the minimum. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod output;
pub mod query;
pub mod rank;
pub mod weight;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::SearchConfig;
pub use enumerate::{
    all_simple_paths, shortest_simple_path, EnumerationStrategy, Path, SearchLimits,
};
pub use error::{Error, Result};
pub use graph::{
    check_vertex_count, validate, Graph, GraphStats, Matrix, VertexId, Weight, MAX_VERTEX_COUNT,
};
pub use matrix::{load_matrix, parse_matrix, parse_matrix_json};
pub use output::{format_matrix, format_path, format_weight, ReportRenderMode, RouteReport};
pub use query::{compute_routes, compute_routes_with, minimum_route, QueryResult, RouteQuery};
pub use rank::{minimum, rank, MinimumPath, WeightedPath};
pub use weight::path_weight;
