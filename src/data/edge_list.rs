//! Whitespace-delimited edge list files

use std::fs;
use std::path::Path;
use anyhow::{anyhow, bail, Context, Result};
use crate::graph::Vertex;

/// Parse a single vertex id, rejecting anything that is not a non-negative integer
fn parse_vertex(token: &str, line_no: usize) -> Result<Vertex> {
    token.parse::<Vertex>()
        .map_err(|e| anyhow!("line {}: invalid vertex id {:?}: {}", line_no, token, e))
}

/// Parse `"<src> <dst>"` lines. Blank lines and `#`/`%` comments are skipped;
/// columns after the second are ignored.
pub fn parse_edges(text: &str) -> Result<Vec<(Vertex, Vertex)>> {
    let mut edges = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (src, dst) = match (fields.next(), fields.next()) {
            (Some(src), Some(dst)) => (src, dst),
            _ => bail!("line {}: expected two vertex ids, got {:?}", line_no, line),
        };

        edges.push((parse_vertex(src, line_no)?, parse_vertex(dst, line_no)?));
    }

    Ok(edges)
}

/// Read and parse an edge list file
pub fn load_edge_list(path: &Path) -> Result<Vec<(Vertex, Vertex)>> {
    log::info!("Reading edge list: {}", path.display());

    let text = fs::read_to_string(path)
        .with_context(|| format!("File couldn't be opened: {}", path.display()))?;

    if text.trim().is_empty() {
        log::warn!("Edge list {} is empty", path.display());
    }

    let edges = parse_edges(&text)?;
    log::info!("Loaded {} edges", edges.len());

    Ok(edges)
}
