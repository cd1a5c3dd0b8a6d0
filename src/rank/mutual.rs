//! Rank a vertex's existing friends by shared connections

use crate::error::RecommendResult;
use crate::graph::intersect::count_intersection;
use crate::graph::{neighbor_set_of, neighbor_sets_of, SocialGraph, Vertex};
use crate::rank::{request_size, Connection, Ranking};

/// Top `n` neighbors of `k`, ordered by how many of their own neighbors are
/// also neighbors of `k`. Ties keep ascending vertex order.
pub fn top_friends(graph: &SocialGraph, k: Vertex, n: i64) -> RecommendResult<Ranking<Connection>> {
    let requested = request_size(n)?;

    let friends = neighbor_set_of(graph, k)?;
    let friends_of_friends = neighbor_sets_of(graph, &friends)?;

    let mut connections: Vec<Connection> = friends.iter()
        .zip(&friends_of_friends)
        .map(|(&id, their_friends)| Connection {
            id,
            mutual_friends: count_intersection(their_friends, &friends),
        })
        .collect();

    // Stable: equal scores stay in ascending id order
    connections.sort_by(|a, b| b.mutual_friends.cmp(&a.mutual_friends));

    log::debug!("Scored {} friends of vertex {}", connections.len(), k);

    Ok(Ranking::top(k, requested, connections))
}
