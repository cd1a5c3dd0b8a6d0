//! Immutable adjacency store for an undirected social graph

use std::collections::HashMap;
use crate::error::{RecommendError, RecommendResult};
use crate::graph::Vertex;

/// Sorted, duplicate-free set of every vertex known to the graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniverseSet {
    vertices: Vec<Vertex>,
}

impl UniverseSet {
    /// Build the universe from vertex ids in any order
    pub fn from_vertices(mut vertices: Vec<Vertex>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }
}

/// Compressed sparse representation of an undirected graph.
///
/// Each undirected edge is stored twice, once in each endpoint's slice of
/// `edges`. Adjacency slices keep insertion order; sorting happens when a
/// `NeighborSet` is derived from them.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    /// Number of vertices in the graph
    pub(crate) vertex_count: usize,

    /// offsets[i] to offsets[i+1] defines the adjacency range for slot i
    pub(crate) offsets: Vec<usize>,

    /// Concatenated adjacency lists, holding vertex ids
    pub(crate) edges: Vec<Vertex>,

    /// Vertex id -> slot lookup
    pub(crate) index: HashMap<Vertex, u32>,

    /// Slot -> vertex id
    pub(crate) vertex_ids: Vec<Vertex>,

    /// Every vertex that was added, sorted
    pub(crate) universe: UniverseSet,
}

impl SocialGraph {
    /// Build a graph from decoded `(src, dst)` pairs
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut builder = crate::graph::GraphBuilder::new();
        builder.extend_edges(edges);
        builder.build()
    }

    /// True iff `k` appeared in an edge or was added as an isolated vertex
    pub fn has_vertex(&self, k: Vertex) -> bool {
        self.index.contains_key(&k)
    }

    fn slot(&self, k: Vertex) -> RecommendResult<usize> {
        self.index
            .get(&k)
            .map(|&slot| slot as usize)
            .ok_or(RecommendError::UnknownVertex(k))
    }

    /// Raw adjacency of `k` in insertion order
    pub fn neighbors(&self, k: Vertex) -> RecommendResult<&[Vertex]> {
        let slot = self.slot(k)?;
        let start = self.offsets[slot];
        let end = self.offsets[slot + 1];
        Ok(&self.edges[start..end])
    }

    /// Number of distinct neighbors of `k`
    pub fn degree(&self, k: Vertex) -> RecommendResult<usize> {
        Ok(self.neighbors(k)?.len())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn universe(&self) -> &UniverseSet {
        &self.universe
    }

    /// Vertex ids in the order they were first seen
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertex_ids.iter().copied()
    }
}
