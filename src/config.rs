//! Configuration management for the friend recommender

use std::path::{Path, PathBuf};
use clap::ValueEnum;
use serde::{Serialize, Deserialize};
use crate::graph::Vertex;

/// Encoding of the edge supplier file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum InputFormat {
    /// Two whitespace-separated ids per line
    EdgeList,
    /// Two integer columns in a Parquet file
    Parquet,
}

/// Which ranking to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Existing friends ordered by mutual connections
    Friends,
    /// Non-friends ordered by how many friends know them
    Suggest,
}

/// Run configuration for a single recommendation query
#[derive(Debug, Clone)]
pub struct Config {
    /// Edge list input file
    pub input: PathBuf,

    /// Input encoding; inferred from the file extension when unset
    pub format: Option<InputFormat>,

    /// Source column name for Parquet input
    pub source_column: String,

    /// Target column name for Parquet input
    pub target_column: String,

    /// Vertex to compute recommendations for
    pub vertex: Vertex,

    /// Number of results requested
    pub top_n: i64,

    pub mode: Mode,

    /// Optional JSON output path
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("suggest_friends.txt"),
            format: None,
            source_column: "src".to_string(),
            target_column: "dst".to_string(),
            vertex: 0,
            top_n: 2,
            mode: Mode::Suggest,
            output: None,
        }
    }
}

impl Config {
    /// Create a configuration for the given input, query and mode
    pub fn new(input: impl Into<PathBuf>, vertex: Vertex, top_n: i64, mode: Mode) -> Self {
        Self {
            input: input.into(),
            vertex,
            top_n,
            mode,
            ..Self::default()
        }
    }

    /// Explicit format, or Parquet for `.parquet`/`.pq` files and edge list otherwise
    pub fn input_format(&self) -> InputFormat {
        self.format.unwrap_or_else(|| infer_format(&self.input))
    }
}

fn infer_format(path: &Path) -> InputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("parquet") || ext.eq_ignore_ascii_case("pq") => {
            InputFormat::Parquet
        }
        _ => InputFormat::EdgeList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.vertex, 0);
        assert_eq!(config.top_n, 2);
        assert_eq!(config.mode, Mode::Suggest);
        assert_eq!(config.input_format(), InputFormat::EdgeList);
    }

    #[test]
    fn test_format_inference() {
        let config = Config::new("links.PARQUET", 3, 5, Mode::Friends);
        assert_eq!(config.input_format(), InputFormat::Parquet);
        assert_eq!(Config::new("edges.txt", 0, 1, Mode::Friends).input_format(), InputFormat::EdgeList);

        let forced = Config { format: Some(InputFormat::EdgeList), ..config };
        assert_eq!(forced.input_format(), InputFormat::EdgeList);
    }
}
