//! Ranking of existing friends and of friend suggestions

pub mod mutual;
pub mod suggest;

use serde::{Serialize, Deserialize};
use crate::error::{RecommendError, RecommendResult};
use crate::graph::Vertex;

pub use mutual::top_friends;
pub use suggest::{suggest_friends, suggestion_breakdown, Contribution};

/// An existing neighbor of the query vertex and how many neighbors they share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: Vertex,
    pub mutual_friends: usize,
}

/// A non-neighbor of the query vertex and how many of its friends know them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Vertex,
    pub occurrences: usize,
}

/// Top-N slice of a ranking, with the original request kept so a caller
/// can tell when fewer entries were available than asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking<T> {
    /// Vertex the ranking was computed for
    pub vertex: Vertex,

    /// N as requested
    pub requested: usize,

    /// Number of entries that existed before truncation
    pub available: usize,

    /// Ranked entries, at most `requested` long
    pub entries: Vec<T>,
}

impl<T> Ranking<T> {
    /// Truncate an already sorted list to the first `requested` entries
    pub(crate) fn top(vertex: Vertex, requested: usize, mut ranked: Vec<T>) -> Self {
        let available = ranked.len();
        ranked.truncate(requested);

        if requested > available {
            log::debug!("Clamped request for vertex {} from {} to {}",
                       vertex, requested, available);
        }

        Self {
            vertex,
            requested,
            available,
            entries: ranked,
        }
    }

    /// Effective N after clamping
    pub fn effective(&self) -> usize {
        self.entries.len()
    }

    /// True when N exceeded the number of available entries
    pub fn is_clamped(&self) -> bool {
        self.requested > self.available
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate a requested result count
pub(crate) fn request_size(n: i64) -> RecommendResult<usize> {
    usize::try_from(n).map_err(|_| RecommendError::InvalidRequestSize(n))
}
