//! Query orchestration: validate, enumerate, weigh, rank.
//!
//! This module provides:
//! - [`RouteQuery`] - endpoints plus search settings
//! - [`QueryResult`] - ranked paths and the minimum
//! - [`compute_routes`] - main entry point from a raw matrix
//! - [`compute_routes_with`] - entry point for an already validated graph
//! - [`minimum_route`] - the minimum alone, via branch-and-bound
//!
//! # Example
//!
//! ```
//! use pathrank_lib::{compute_routes, MinimumPath};
//!
//! let matrix = vec![
//!     vec![0.0, 1.0, 4.0, 2.0],
//!     vec![1.0, 0.0, 1.0, 5.0],
//!     vec![4.0, 1.0, 0.0, 1.0],
//!     vec![2.0, 5.0, 1.0, 0.0],
//! ];
//! let result = compute_routes(matrix, 1, 4)?;
//! assert_eq!(result.ranked.len(), 5);
//! match result.minimum {
//!     MinimumPath::Found(best) => assert_eq!(best.path, vec![1, 4]),
//!     MinimumPath::Unreachable => unreachable!(),
//! }
//! # Ok::<(), pathrank_lib::Error>(())
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::enumerate::{
    select_enumerator, shortest_simple_path, validate_endpoints, EnumerationStrategy,
    SearchLimits,
};
use crate::error::Result;
use crate::graph::{check_vertex_count, Graph, Matrix, VertexId, LARGE_GRAPH_WARNING};
use crate::rank::{minimum, rank, MinimumPath, WeightedPath};
use crate::weight::path_weight;

/// One path query against a graph.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub start: VertexId,
    pub end: VertexId,
    pub config: SearchConfig,
    /// Set from another thread to stop the query with [`crate::Error::Cancelled`].
    pub cancel: Option<Arc<AtomicBool>>,
}

impl RouteQuery {
    /// Query with default settings: backtracking, no deadline, no size ceiling.
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            config: SearchConfig::default(),
            cancel: None,
        }
    }

    /// Replace the search settings.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace only the enumeration strategy.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Attach a cancellation flag checked throughout the search.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Deadline from the configuration plus the cancellation flag, starting now.
    pub fn limits(&self) -> SearchLimits {
        let limits = self.config.limits();
        match &self.cancel {
            Some(flag) => limits.with_cancel_flag(Arc::clone(flag)),
            None => limits,
        }
    }
}

/// Ranked simple paths between two vertices.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryResult {
    pub start: VertexId,
    pub end: VertexId,
    pub strategy: EnumerationStrategy,
    /// Every simple path, weight ascending, ties by vertex sequence.
    pub ranked: Vec<WeightedPath>,
    pub minimum: MinimumPath,
}

impl QueryResult {
    /// Number of simple paths found.
    pub fn path_count(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_unreachable(&self) -> bool {
        self.minimum.is_unreachable()
    }
}

/// Validate `matrix`, then rank every simple path from `start` to `end`.
///
/// Uses default settings; see [`compute_routes_with`] for strategy and limits.
pub fn compute_routes(matrix: Matrix, start: VertexId, end: VertexId) -> Result<QueryResult> {
    let graph = Graph::from_matrix(matrix)?;
    compute_routes_with(&graph, &RouteQuery::new(start, end))
}

/// Rank every simple path of an already validated graph.
///
/// Paths are enumerated once and each is weighed exactly once. Disconnected
/// endpoints produce an empty ranking with [`MinimumPath::Unreachable`].
pub fn compute_routes_with(graph: &Graph, query: &RouteQuery) -> Result<QueryResult> {
    prepare(graph, query)?;

    let enumerator = select_enumerator(query.config.strategy);
    let paths = enumerator.enumerate(graph, query.start, query.end, &query.limits())?;
    debug!(
        strategy = %enumerator.strategy(),
        "enumerated {} simple paths from {} to {}",
        paths.len(),
        query.start,
        query.end
    );

    let weighted = paths
        .into_iter()
        .map(|path| WeightedPath::new(path_weight(graph, &path), path))
        .collect();
    let ranked = rank(weighted);
    let minimum = minimum(&ranked);

    match &minimum {
        MinimumPath::Found(best) => debug!(
            "minimum weight {} via {:?}",
            best.weight, best.path
        ),
        MinimumPath::Unreachable => debug!(
            "vertices {} and {} are not connected",
            query.start, query.end
        ),
    }

    Ok(QueryResult {
        start: query.start,
        end: query.end,
        strategy: enumerator.strategy(),
        ranked,
        minimum,
    })
}

/// Only the minimum-weight path, pruning branches that cannot beat it.
///
/// The configured strategy is ignored; branch-and-bound is always used.
pub fn minimum_route(graph: &Graph, query: &RouteQuery) -> Result<MinimumPath> {
    prepare(graph, query)?;
    shortest_simple_path(graph, query.start, query.end, &query.limits())
}

fn prepare(graph: &Graph, query: &RouteQuery) -> Result<()> {
    validate_endpoints(graph, query.start, query.end)?;

    let vertex_count = graph.vertex_count();
    check_vertex_count(vertex_count, query.config.max_vertices)?;
    if vertex_count > LARGE_GRAPH_WARNING {
        warn!(
            "graph has {} vertices; exhaustive enumeration may take a very long time",
            vertex_count
        );
    }
    Ok(())
}
