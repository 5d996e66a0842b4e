//! Enumeration strategies implementing the Strategy pattern.
//!
//! This module provides the `PathEnumerator` trait and one implementation per
//! [`EnumerationStrategy`]. All of them return the same set of paths; they
//! differ only in how much work they do to find it.

use crate::error::Result;
use crate::graph::{Graph, VertexId};

use super::{
    backtracking_paths, parallel_paths, permutation_paths, EnumerationStrategy, Path, SearchLimits,
};

/// Trait for simple-path enumeration strategies.
pub trait PathEnumerator: Send + Sync {
    /// The strategy identifier for this enumerator.
    fn strategy(&self) -> EnumerationStrategy;

    /// Produce every simple path from `start` to `end`.
    ///
    /// Fails on invalid endpoints or when `limits` stop the search. The order
    /// of the returned paths is unspecified.
    fn enumerate(
        &self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        limits: &SearchLimits,
    ) -> Result<Vec<Path>>;
}

/// Depth-first search that follows existing edges only.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingEnumerator;

impl PathEnumerator for BacktrackingEnumerator {
    fn strategy(&self) -> EnumerationStrategy {
        EnumerationStrategy::Backtracking
    }

    fn enumerate(
        &self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        limits: &SearchLimits,
    ) -> Result<Vec<Path>> {
        backtracking_paths(graph, start, end, limits)
    }
}

/// Generate-and-filter over every arrangement of intermediate vertices.
///
/// Kept as a reference implementation; it visits candidates that can never
/// be paths and is only practical for very small graphs.
#[derive(Debug, Clone, Default)]
pub struct PermutationEnumerator;

impl PathEnumerator for PermutationEnumerator {
    fn strategy(&self) -> EnumerationStrategy {
        EnumerationStrategy::Permutation
    }

    fn enumerate(
        &self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        limits: &SearchLimits,
    ) -> Result<Vec<Path>> {
        permutation_paths(graph, start, end, limits)
    }
}

/// Backtracking sharded across the rayon thread pool.
#[derive(Debug, Clone, Default)]
pub struct ParallelEnumerator;

impl PathEnumerator for ParallelEnumerator {
    fn strategy(&self) -> EnumerationStrategy {
        EnumerationStrategy::Parallel
    }

    fn enumerate(
        &self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        limits: &SearchLimits,
    ) -> Result<Vec<Path>> {
        parallel_paths(graph, start, end, limits)
    }
}

/// Select the enumerator for a given strategy.
pub fn select_enumerator(strategy: EnumerationStrategy) -> Box<dyn PathEnumerator> {
    match strategy {
        EnumerationStrategy::Backtracking => Box::new(BacktrackingEnumerator),
        EnumerationStrategy::Permutation => Box::new(PermutationEnumerator),
        EnumerationStrategy::Parallel => Box::new(ParallelEnumerator),
    }
}
