//! Error types for ranking queries

use thiserror::Error;
use crate::graph::Vertex;

/// Failures a ranking request can report back to its caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The query target was never added to the graph
    #[error("vertex {0} is not in the network")]
    UnknownVertex(Vertex),

    /// Requested result count was negative
    #[error("N must be a non-negative integer, got {0}")]
    InvalidRequestSize(i64),
}

pub type RecommendResult<T> = std::result::Result<T, RecommendError>;
