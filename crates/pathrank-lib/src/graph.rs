use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};

/// 1-based vertex label used throughout the public API.
pub type VertexId = usize;

/// Edge weight. Zero is reserved for "no edge".
pub type Weight = f64;

/// Row-major adjacency table as supplied by callers.
pub type Matrix = Vec<Vec<Weight>>;

/// Enumeration is factorial in the vertex count. Beyond this size a query is
/// still attempted but logged as potentially unbounded.
pub const LARGE_GRAPH_WARNING: usize = 12;

/// Largest vertex count a dense matrix is ever allocated for.
pub const MAX_VERTEX_COUNT: usize = 1024;

/// Reject `vertex_count` above [`MAX_VERTEX_COUNT`] or above `ceiling`.
///
/// Call before allocating an `n × n` matrix.
pub fn check_vertex_count(vertex_count: usize, ceiling: Option<usize>) -> Result<()> {
    let limit = ceiling.map_or(MAX_VERTEX_COUNT, |ceiling| ceiling.min(MAX_VERTEX_COUNT));
    if vertex_count > limit {
        return Err(Error::GraphTooLarge {
            vertex_count,
            limit,
        });
    }
    Ok(())
}

/// Check that `matrix` is square and symmetric across its main diagonal.
///
/// This never fails; callers branch on the result. Weights and the diagonal
/// are checked separately by [`Graph::from_matrix`].
pub fn validate(matrix: &[Vec<Weight>]) -> bool {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return false;
    }
    first_asymmetry(matrix).is_none()
}

fn first_asymmetry(matrix: &[Vec<Weight>]) -> Option<(usize, usize)> {
    let n = matrix.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix[i][j] != matrix[j][i] {
                return Some((i, j));
            }
        }
    }
    None
}

/// Undirected weighted graph backed by a validated adjacency matrix.
///
/// Vertices are labelled `1..=n`. A weight of `0` means the two vertices are
/// not connected, so zero-cost edges cannot be expressed.
#[derive(Debug, Clone)]
pub struct Graph {
    weights: Arc<Matrix>,
    adjacency: Arc<Vec<Vec<VertexId>>>,
}

impl Graph {
    /// Build a graph from a full adjacency matrix.
    ///
    /// Rejects empty, non-square and asymmetric matrices, non-zero diagonal
    /// entries, and weights that are negative or not finite.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NonSquareMatrix {
                    row: i + 1,
                    expected: n,
                    found: row.len(),
                });
            }
        }

        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidWeight {
                        row: i + 1,
                        column: j + 1,
                        weight,
                    });
                }
            }
            if row[i] != 0.0 {
                return Err(Error::NonZeroDiagonal { vertex: i + 1 });
            }
        }

        if let Some((i, j)) = first_asymmetry(&matrix) {
            return Err(Error::AsymmetricMatrix {
                row: i + 1,
                column: j + 1,
            });
        }

        let adjacency = matrix
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &weight)| weight != 0.0)
                    .map(|(j, _)| j + 1)
                    .collect()
            })
            .collect();

        Ok(Self {
            weights: Arc::new(matrix),
            adjacency: Arc::new(adjacency),
        })
    }

    /// Build a graph with `vertex_count` vertices from undirected `(u, v, weight)` triples.
    ///
    /// Each edge is mirrored; later duplicates overwrite earlier ones. Counts
    /// above [`MAX_VERTEX_COUNT`] fail with [`Error::GraphTooLarge`] before
    /// anything is allocated.
    pub fn from_edges(vertex_count: usize, edges: &[(VertexId, VertexId, Weight)]) -> Result<Self> {
        check_vertex_count(vertex_count, None)?;
        let mut matrix = vec![vec![0.0; vertex_count]; vertex_count];
        for &(u, v, weight) in edges {
            for vertex in [u, v] {
                if vertex == 0 || vertex > vertex_count {
                    return Err(Error::InvalidVertex {
                        vertex,
                        vertex_count,
                    });
                }
            }
            matrix[u - 1][v - 1] = weight;
            matrix[v - 1][u - 1] = weight;
        }
        Self::from_matrix(matrix)
    }

    /// Number of vertices `n`.
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Iterate over every vertex label in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        1..=self.vertex_count()
    }

    /// Whether `vertex` is a label of this graph.
    pub fn contains(&self, vertex: VertexId) -> bool {
        (1..=self.vertex_count()).contains(&vertex)
    }

    /// True iff an edge joins `x` and `y`. Unknown labels are never connected.
    pub fn is_connected(&self, x: VertexId, y: VertexId) -> bool {
        self.edge_weight(x, y).is_some()
    }

    /// Weight of the edge between `x` and `y`, if there is one.
    pub fn edge_weight(&self, x: VertexId, y: VertexId) -> Option<Weight> {
        if !self.contains(x) || !self.contains(y) {
            return None;
        }
        let weight = self.weights[x - 1][y - 1];
        (weight != 0.0).then_some(weight)
    }

    /// Connected vertices of `vertex` in ascending label order.
    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        if !self.contains(vertex) {
            return &[];
        }
        &self.adjacency[vertex - 1]
    }

    /// Number of vertices connected to `vertex`.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbours(vertex).len()
    }

    /// Number of unordered connected pairs.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, targets)| targets.iter().filter(|&&j| j > i + 1).count())
            .sum()
    }

    /// The validated adjacency table.
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.weights
    }

    /// Summary counts for display and diagnostics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            degrees: self.vertices().map(|v| self.degree(v)).collect(),
        }
    }
}

/// Size and degree summary of a [`Graph`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Degree of vertex `i + 1` at index `i`.
    pub degrees: Vec<usize>,
}
