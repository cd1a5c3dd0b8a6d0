//! Friend recommendations over an undirected social graph

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod rank;
pub mod report;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use error::RecommendError;
pub use graph::{GraphBuilder, SocialGraph, Vertex};
pub use rank::{suggest_friends, suggestion_breakdown, top_friends, Candidate, Connection, Ranking};
