use std::cmp::Ordering;

use serde::Serialize;

use crate::graph::{VertexId, Weight};

/// A simple path paired with its total weight.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightedPath {
    pub weight: Weight,
    pub path: Vec<VertexId>,
}

impl WeightedPath {
    pub fn new(weight: Weight, path: Vec<VertexId>) -> Self {
        Self { weight, path }
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of looking for the cheapest path.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MinimumPath {
    Found(WeightedPath),
    /// No simple path joins the endpoints. This is a normal outcome.
    Unreachable,
}

impl MinimumPath {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, MinimumPath::Unreachable)
    }

    pub fn as_path(&self) -> Option<&WeightedPath> {
        match self {
            MinimumPath::Found(path) => Some(path),
            MinimumPath::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<WeightedPath> {
        match self {
            MinimumPath::Found(path) => Some(path),
            MinimumPath::Unreachable => None,
        }
    }
}

/// Total order used for ranking: weight ascending, then vertex sequence
/// lexicographically.
pub fn compare(a: &WeightedPath, b: &WeightedPath) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.path.cmp(&b.path))
}

/// Sort paths by ascending weight with deterministic tie-breaking.
pub fn rank(mut paths: Vec<WeightedPath>) -> Vec<WeightedPath> {
    paths.sort_by(compare);
    paths
}

/// First entry of an already ranked sequence, or [`MinimumPath::Unreachable`].
pub fn minimum(ranked: &[WeightedPath]) -> MinimumPath {
    ranked
        .first()
        .cloned()
        .map_or(MinimumPath::Unreachable, MinimumPath::Found)
}
