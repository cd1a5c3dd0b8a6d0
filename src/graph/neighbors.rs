//! Sorted neighbor sets derived from the adjacency store

use std::ops::Deref;
use rayon::prelude::*;
use crate::error::RecommendResult;
use crate::graph::{SocialGraph, Vertex};

/// Inputs at least this long are expanded on the rayon pool
const PARALLEL_THRESHOLD: usize = 1024;

/// Sorted, duplicate-free neighbors of one vertex
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborSet {
    vertices: Vec<Vertex>,
}

impl NeighborSet {
    /// Sort and dedup raw adjacency
    pub fn from_unsorted(mut vertices: Vec<Vertex>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl Deref for NeighborSet {
    type Target = [Vertex];

    fn deref(&self) -> &[Vertex] {
        &self.vertices
    }
}

/// Neighbor set of `k`. O(d log d) in the degree of `k`.
pub fn neighbor_set_of(graph: &SocialGraph, k: Vertex) -> RecommendResult<NeighborSet> {
    let raw = graph.neighbors(k)?;
    Ok(NeighborSet::from_unsorted(raw.to_vec()))
}

/// One neighbor set per input vertex; element i belongs to `vertices[i]`
pub fn neighbor_sets_of(
    graph: &SocialGraph,
    vertices: &[Vertex],
) -> RecommendResult<Vec<NeighborSet>> {
    if vertices.len() < PARALLEL_THRESHOLD {
        return vertices.iter()
            .map(|&v| neighbor_set_of(graph, v))
            .collect();
    }

    log::debug!("Expanding {} neighbor sets in parallel", vertices.len());
    vertices.par_iter()
        .map(|&v| neighbor_set_of(graph, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;

    #[test]
    fn test_neighbor_set_sorted_without_duplicates() {
        let graph = SocialGraph::from_edges([(0, 9), (0, 3), (3, 0), (0, 5), (9, 0), (0, 1)]);
        let set = neighbor_set_of(&graph, 0).unwrap();
        assert_eq!(set.as_slice(), &[1, 3, 5, 9]);
        assert!(set.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_isolated_vertex_has_empty_set() {
        let mut builder = crate::graph::GraphBuilder::new();
        builder.add_vertex(4);
        let graph = builder.build();
        assert!(neighbor_set_of(&graph, 4).unwrap().is_empty());
        assert_eq!(neighbor_set_of(&graph, 5), Err(RecommendError::UnknownVertex(5)));
    }

    #[test]
    fn test_from_unsorted() {
        let set = NeighborSet::from_unsorted(vec![5, 1, 5, 3, 1]);
        assert_eq!(set.into_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn test_neighbor_sets_align_with_input() {
        let graph = SocialGraph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3)]);
        let sets = neighbor_sets_of(&graph, &[3, 1, 2]).unwrap();
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0].as_slice(), &[1]);
        assert_eq!(sets[1].as_slice(), &[0, 2, 3]);
        assert_eq!(sets[2].as_slice(), &[0, 1]);
    }

    #[test]
    fn test_neighbor_sets_fail_on_unknown_member() {
        let graph = SocialGraph::from_edges([(0, 1)]);
        assert_eq!(neighbor_sets_of(&graph, &[0, 8]), Err(RecommendError::UnknownVertex(8)));
    }

    #[test]
    fn test_parallel_expansion_keeps_order() {
        // Star around vertex 0 wide enough to cross the parallel threshold
        let leaves: Vec<Vertex> = (1..=(PARALLEL_THRESHOLD as Vertex + 10)).collect();
        let graph = SocialGraph::from_edges(leaves.iter().map(|&leaf| (0, leaf)));
        let mut reversed = leaves.clone();
        reversed.reverse();

        let sets = neighbor_sets_of(&graph, &reversed).unwrap();
        assert_eq!(sets.len(), reversed.len());
        assert!(sets.iter().all(|set| set.as_slice() == [0]));

        let center = neighbor_set_of(&graph, 0).unwrap();
        assert_eq!(center.as_slice(), leaves.as_slice());
    }
}
