//! Graph construction module

use std::collections::{HashMap, HashSet};
use crate::graph::store::{SocialGraph, UniverseSet};
use crate::graph::Vertex;

/// Builder for incrementally constructing a SocialGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from vertex ids to slots
    index: HashMap<Vertex, u32>,

    /// Vertex id per slot
    vertex_ids: Vec<Vertex>,

    /// Adjacency lists for each slot
    adjacency_lists: Vec<Vec<Vertex>>,

    /// Undirected edges already inserted, stored as (min, max)
    seen: HashSet<(Vertex, Vertex)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given vertex capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            vertex_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Get or create the slot for the given vertex id
    fn get_or_create_node(&mut self, id: Vertex) -> u32 {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }

        let slot = self.vertex_ids.len() as u32;
        self.index.insert(id, slot);
        self.vertex_ids.push(id);
        self.adjacency_lists.push(Vec::new());

        slot
    }

    /// Register a vertex that may have no edges
    pub fn add_vertex(&mut self, id: Vertex) {
        self.get_or_create_node(id);
    }

    /// Add an undirected edge. Returns false when the edge was already
    /// present or is a self-loop; both endpoints are registered either way.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let u_slot = self.get_or_create_node(u);
        let v_slot = self.get_or_create_node(v);

        if u == v {
            log::debug!("Ignoring self-loop on vertex {}", u);
            return false;
        }

        if !self.seen.insert((u.min(v), u.max(v))) {
            return false;
        }

        self.adjacency_lists[u_slot as usize].push(v);
        self.adjacency_lists[v_slot as usize].push(u);

        true
    }

    /// Add every edge from an edge supplier
    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut duplicates = 0usize;
        for (u, v) in edges {
            if !self.add_edge(u, v) && u != v {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            log::debug!("Skipped {} duplicate edges", duplicates);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Build the immutable graph
    pub fn build(self) -> SocialGraph {
        let vertex_count = self.vertex_ids.len();
        let edge_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        // Create offsets array
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);

        let mut offset = 0usize;
        for list in &self.adjacency_lists {
            offset += list.len();
            offsets.push(offset);
        }

        // Concatenate adjacency lists as inserted
        let mut edges = Vec::with_capacity(edge_count);
        for list in &self.adjacency_lists {
            edges.extend_from_slice(list);
        }

        let universe = UniverseSet::from_vertices(self.vertex_ids.clone());

        log::info!("Built graph with {} vertices and {} edges",
                  vertex_count, edge_count / 2);

        SocialGraph {
            vertex_count,
            offsets,
            edges,
            index: self.index,
            vertex_ids: self.vertex_ids,
            universe,
        }
    }
}
