//! Edge suppliers: decode input files into vertex pairs

pub mod edge_list;
pub mod parquet;

use anyhow::Result;
use crate::config::{Config, InputFormat};
use crate::graph::{SocialGraph, Vertex};

/// Decode the configured input into `(src, dst)` pairs
pub fn load_edges(config: &Config) -> Result<Vec<(Vertex, Vertex)>> {
    match config.input_format() {
        InputFormat::EdgeList => edge_list::load_edge_list(&config.input),
        InputFormat::Parquet => parquet::load_edges(
            &config.input,
            &config.source_column,
            &config.target_column,
        ),
    }
}

/// Load the configured input and build the graph from it
pub fn load_graph(config: &Config) -> Result<SocialGraph> {
    let edges = load_edges(config)?;
    Ok(SocialGraph::from_edges(edges))
}
