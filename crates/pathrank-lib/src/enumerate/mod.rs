//! Simple-path enumeration between two vertices.
//!
//! This module provides:
//! - [`all_simple_paths`] - every simple path between two vertices (backtracking search)
//! - [`EnumerationStrategy`] - the available search strategies
//! - [`SearchLimits`] - deadline and cooperative cancellation checks
//! - [`shortest_simple_path`] - branch-and-bound search for the minimum only
//!
//! # Cost
//!
//! Every strategy is exhaustive. The number of simple paths between two
//! vertices of a complete graph on `n` vertices is `Σₖ P(n − 2, k)`, so the
//! work grows factorially with `n`. Backtracking only follows real edges and
//! is much cheaper on sparse graphs, but the worst case is unchanged. Callers
//! handling untrusted input should set a deadline through [`SearchLimits`].
//!
//! # Strategy Pattern
//!
//! Each strategy is a [`PathEnumerator`] implementation. [`select_enumerator`]
//! maps an [`EnumerationStrategy`] to its enumerator, so new strategies can be
//! added without touching the query orchestration.

mod strategy;

pub use strategy::{
    select_enumerator, BacktrackingEnumerator, ParallelEnumerator, PathEnumerator,
    PermutationEnumerator,
};

use std::fmt;
use std::iter;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::rank::{MinimumPath, WeightedPath};

/// Ordered sequence of distinct vertex labels from start to end.
pub type Path = Vec<VertexId>;

/// Permutation candidates checked between two limit checks.
const PERMUTATION_CHECK_INTERVAL: usize = 4096;

/// Supported enumeration strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// Depth-first search along existing edges.
    #[default]
    Backtracking,
    /// Every permutation of every subset of intermediate vertices, filtered
    /// by connectivity.
    Permutation,
    /// Backtracking sharded by first hop across the rayon thread pool.
    Parallel,
}

impl fmt::Display for EnumerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EnumerationStrategy::Backtracking => "backtracking",
            EnumerationStrategy::Permutation => "permutation",
            EnumerationStrategy::Parallel => "parallel",
        };
        f.write_str(value)
    }
}

impl FromStr for EnumerationStrategy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "backtracking" | "dfs" => Ok(EnumerationStrategy::Backtracking),
            "permutation" | "permutations" => Ok(EnumerationStrategy::Permutation),
            "parallel" => Ok(EnumerationStrategy::Parallel),
            other => Err(format!("unknown enumeration strategy '{other}'")),
        }
    }
}

/// Cooperative stop conditions checked while enumerating.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Abort with [`Error::DeadlineExceeded`] once this instant has passed.
    pub deadline: Option<Instant>,
    /// Abort with [`Error::Cancelled`] once this flag is set.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// No deadline and no cancellation.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Set a deadline `timeout` from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Attach a flag another thread may set to stop the search.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Fail if the search was cancelled or ran past its deadline.
    pub fn check(&self) -> Result<()> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// Ensure both endpoints are labels of `graph` and differ from each other.
pub fn validate_endpoints(graph: &Graph, start: VertexId, end: VertexId) -> Result<()> {
    for vertex in [start, end] {
        if !graph.contains(vertex) {
            return Err(Error::InvalidVertex {
                vertex,
                vertex_count: graph.vertex_count(),
            });
        }
    }
    if start == end {
        return Err(Error::SameEndpoints { vertex: start });
    }
    Ok(())
}

/// Every simple path from `start` to `end`, found by backtracking.
///
/// Disconnected endpoints yield an empty list. Paths come out in
/// lexicographic order of their vertex sequences.
pub fn all_simple_paths(graph: &Graph, start: VertexId, end: VertexId) -> Result<Vec<Path>> {
    backtracking_paths(graph, start, end, &SearchLimits::unbounded())
}

/// Depth-first enumeration that only steps to unvisited neighbours.
pub fn backtracking_paths(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    limits: &SearchLimits,
) -> Result<Vec<Path>> {
    validate_endpoints(graph, start, end)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[start - 1] = true;
    let mut path = vec![start];
    let mut found = Vec::new();
    extend_paths(graph, end, start, &mut path, &mut visited, limits, &mut found)?;
    Ok(found)
}

fn extend_paths(
    graph: &Graph,
    end: VertexId,
    current: VertexId,
    path: &mut Path,
    visited: &mut [bool],
    limits: &SearchLimits,
    found: &mut Vec<Path>,
) -> Result<()> {
    limits.check()?;

    for &next in graph.neighbours(current) {
        if visited[next - 1] {
            continue;
        }
        if next == end {
            let mut complete = path.clone();
            complete.push(end);
            found.push(complete);
            continue;
        }

        visited[next - 1] = true;
        path.push(next);
        extend_paths(graph, end, next, path, visited, limits, found)?;
        path.pop();
        visited[next - 1] = false;
    }

    Ok(())
}

/// Exhaustive generate-and-filter enumeration.
///
/// For every intermediate count `k` from `n − 2` down to `0`, every ordered
/// arrangement of `k` vertices other than the endpoints is framed by `start`
/// and `end` and kept if each consecutive pair is connected. Limits are
/// checked between subset sizes and periodically within one.
pub fn permutation_paths(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    limits: &SearchLimits,
) -> Result<Vec<Path>> {
    validate_endpoints(graph, start, end)?;

    let intermediates: Vec<VertexId> = graph
        .vertices()
        .filter(|&v| v != start && v != end)
        .collect();

    let mut found = Vec::new();
    for k in (0..=intermediates.len()).rev() {
        limits.check()?;

        if k == 0 {
            if graph.is_connected(start, end) {
                found.push(vec![start, end]);
            }
            continue;
        }

        for (checked, middle) in intermediates.iter().copied().permutations(k).enumerate() {
            if checked % PERMUTATION_CHECK_INTERVAL == 0 {
                limits.check()?;
            }
            let candidate: Path = iter::once(start)
                .chain(middle)
                .chain(iter::once(end))
                .collect();
            if is_connected_path(graph, &candidate) {
                found.push(candidate);
            }
        }
    }

    Ok(found)
}

/// Backtracking split into one task per neighbour of `start`.
///
/// Shards are independent, so they run on the rayon pool and their results
/// are concatenated in neighbour order.
pub fn parallel_paths(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    limits: &SearchLimits,
) -> Result<Vec<Path>> {
    validate_endpoints(graph, start, end)?;
    limits.check()?;

    let shards: Vec<Vec<Path>> = graph
        .neighbours(start)
        .par_iter()
        .map(|&first| -> Result<Vec<Path>> {
            if first == end {
                return Ok(vec![vec![start, end]]);
            }
            let mut visited = vec![false; graph.vertex_count()];
            visited[start - 1] = true;
            visited[first - 1] = true;
            let mut path = vec![start, first];
            let mut found = Vec::new();
            extend_paths(graph, end, first, &mut path, &mut visited, limits, &mut found)?;
            Ok(found)
        })
        .collect::<Result<_>>()?;

    tracing::debug!("merged {} enumeration shards", shards.len());
    Ok(shards.into_iter().flatten().collect())
}

/// True when every consecutive pair of `path` is connected and no vertex repeats.
pub fn is_connected_path(graph: &Graph, path: &[VertexId]) -> bool {
    path.windows(2).all(|pair| graph.is_connected(pair[0], pair[1]))
        && path.iter().all_unique()
}

/// Cheapest simple path from `start` to `end` without enumerating every path.
///
/// Depth-first search in ascending neighbour order, abandoning a branch as
/// soon as its partial weight reaches the best complete weight found so far.
/// Edge weights are strictly positive, so a pruned branch can never tie. Ties
/// resolve to the lexicographically smallest sequence, matching
/// [`crate::rank::rank`].
pub fn shortest_simple_path(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    limits: &SearchLimits,
) -> Result<MinimumPath> {
    validate_endpoints(graph, start, end)?;

    let mut search = BoundedSearch {
        graph,
        end,
        limits,
        visited: vec![false; graph.vertex_count()],
        path: vec![start],
        best: None,
    };
    search.visited[start - 1] = true;
    search.descend(start, 0.0)?;

    Ok(search
        .best
        .map_or(MinimumPath::Unreachable, MinimumPath::Found))
}

struct BoundedSearch<'a> {
    graph: &'a Graph,
    end: VertexId,
    limits: &'a SearchLimits,
    visited: Vec<bool>,
    path: Path,
    best: Option<WeightedPath>,
}

impl BoundedSearch<'_> {
    fn bound(&self) -> Weight {
        self.best.as_ref().map_or(Weight::INFINITY, |best| best.weight)
    }

    fn descend(&mut self, current: VertexId, partial: Weight) -> Result<()> {
        self.limits.check()?;

        let graph = self.graph;
        for &next in graph.neighbours(current) {
            if self.visited[next - 1] {
                continue;
            }
            let Some(edge) = graph.edge_weight(current, next) else {
                continue;
            };
            let cost = partial + edge;
            if cost >= self.bound() {
                continue;
            }

            if next == self.end {
                let mut complete = self.path.clone();
                complete.push(next);
                self.best = Some(WeightedPath::new(cost, complete));
                continue;
            }

            self.visited[next - 1] = true;
            self.path.push(next);
            self.descend(next, cost)?;
            self.path.pop();
            self.visited[next - 1] = false;
        }

        Ok(())
    }
}
