use thiserror::Error;

use crate::graph::VertexId;

/// Convenient result alias for the pathrank library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The matrix is not symmetric across its main diagonal.
    #[error("adjacency matrix is not symmetric: entry ({row}, {column}) differs from ({column}, {row})")]
    AsymmetricMatrix { row: VertexId, column: VertexId },

    /// A row of the matrix has the wrong number of entries.
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        row: VertexId,
        expected: usize,
        found: usize,
    },

    /// The matrix has no rows at all.
    #[error("adjacency matrix is empty")]
    EmptyMatrix,

    /// A vertex carries a weight to itself.
    #[error("adjacency matrix has a non-zero diagonal entry for vertex {vertex}")]
    NonZeroDiagonal { vertex: VertexId },

    /// Weights must be finite and non-negative.
    #[error("invalid edge weight {weight} at ({row}, {column}); weights must be finite and non-negative")]
    InvalidWeight {
        row: VertexId,
        column: VertexId,
        weight: f64,
    },

    /// A requested endpoint lies outside `1..=vertex_count`.
    #[error("invalid vertex {vertex}: expected a label between 1 and {vertex_count}")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Start and end name the same vertex.
    #[error("invalid vertex {vertex}: start and end must be different vertices")]
    SameEndpoints { vertex: VertexId },

    /// The graph exceeds the configured vertex ceiling.
    #[error("graph has {vertex_count} vertices which exceeds the configured limit of {limit}")]
    GraphTooLarge { vertex_count: usize, limit: usize },

    /// The search deadline elapsed before enumeration finished.
    #[error("path enumeration exceeded its deadline")]
    DeadlineExceeded,

    /// The caller cancelled the search.
    #[error("path enumeration was cancelled")]
    Cancelled,

    /// Raised when a textual matrix could not be parsed.
    #[error("failed to parse matrix at line {line}: {message}")]
    MatrixParse { line: usize, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the endpoint errors: out-of-range labels and `start == end`.
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(
            self,
            Error::InvalidVertex { .. } | Error::SameEndpoints { .. }
        )
    }

    /// True for any structural problem with the adjacency matrix.
    pub fn is_invalid_matrix(&self) -> bool {
        matches!(
            self,
            Error::AsymmetricMatrix { .. }
                | Error::NonSquareMatrix { .. }
                | Error::EmptyMatrix
                | Error::NonZeroDiagonal { .. }
                | Error::InvalidWeight { .. }
        )
    }
}
