//! Suggest new friends for a vertex from its friends' neighborhoods

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use crate::error::RecommendResult;
use crate::graph::intersect::{binary_search, intersect};
use crate::graph::{neighbor_set_of, neighbor_sets_of, SocialGraph, UniverseSet, Vertex};
use crate::rank::{request_size, Candidate, Ranking};

/// Candidates contributed by a single friend of the query vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub friend: Vertex,

    /// Neighbors of `friend` that are not yet friends of the query vertex
    pub candidates: Vec<Vertex>,
}

/// Everyone in the universe except `k` and the members of `friends`
fn not_friends(universe: &UniverseSet, friends: &[Vertex], k: Vertex) -> Vec<Vertex> {
    universe.as_slice()
        .iter()
        .copied()
        .filter(|&v| v != k && !binary_search(v, friends))
        .collect()
}

/// For each friend of `k`, in ascending id order, the non-friends of `k`
/// that friend knows
pub fn suggestion_breakdown(graph: &SocialGraph, k: Vertex) -> RecommendResult<Vec<Contribution>> {
    let friends = neighbor_set_of(graph, k)?;
    let friends_of_friends = neighbor_sets_of(graph, &friends)?;
    let strangers = not_friends(graph.universe(), &friends, k);

    let contributions = friends.iter()
        .zip(&friends_of_friends)
        .map(|(&friend, their_friends)| Contribution {
            friend,
            candidates: intersect(their_friends, &strangers),
        })
        .collect();

    Ok(contributions)
}

/// Top `n` non-friends of `k`, ordered by how many friends of `k` know
/// them, then by ascending id
pub fn suggest_friends(graph: &SocialGraph, k: Vertex, n: i64) -> RecommendResult<Ranking<Candidate>> {
    let requested = request_size(n)?;

    let mut pooled: Vec<Vertex> = suggestion_breakdown(graph, k)?
        .into_iter()
        .flat_map(|contribution| contribution.candidates)
        .collect();
    pooled.sort_unstable();

    let mut candidates: Vec<Candidate> = pooled.into_iter()
        .dedup_with_count()
        .map(|(occurrences, id)| Candidate { id, occurrences })
        .collect();

    candidates.sort_by(|a, b| {
        b.occurrences.cmp(&a.occurrences).then(a.id.cmp(&b.id))
    });

    log::debug!("Found {} suggestion candidates for vertex {}", candidates.len(), k);

    Ok(Ranking::top(k, requested, candidates))
}
