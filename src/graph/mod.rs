//! Graph representation and neighbor-set primitives

pub mod store;
pub mod builder;
pub mod neighbors;
pub mod intersect;

/// Non-negative vertex identifier
pub type Vertex = u32;

pub use builder::GraphBuilder;
pub use neighbors::{neighbor_set_of, neighbor_sets_of, NeighborSet};
pub use store::{SocialGraph, UniverseSet};
