//! Parquet file handling for edge lists

use std::path::Path;
use anyhow::{anyhow, Result};
use polars::prelude::*;
use crate::graph::Vertex;

/// Load `(source, target)` pairs from two integer columns of a Parquet file
pub fn load_edges(path: &Path, source_column: &str, target_column: &str) -> Result<Vec<(Vertex, Vertex)>> {
    log::info!("Reading parquet file: {}", path.display());

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let df = LazyFrame::scan_parquet(path, Default::default())?
        .select([col(source_column), col(target_column)])
        .collect()?;

    log::debug!("File schema: {:?}", df.schema());
    log::info!("Loaded {} edge rows", df.height());

    // Non-strict cast turns negative or oversized ids into nulls
    let sources = df.column(source_column)?.cast(&DataType::UInt32)?;
    let targets = df.column(target_column)?.cast(&DataType::UInt32)?;
    let sources = sources.u32()?;
    let targets = targets.u32()?;

    let mut edges = Vec::with_capacity(df.height());
    for (row, (src, dst)) in sources.into_iter().zip(targets.into_iter()).enumerate() {
        match (src, dst) {
            (Some(src), Some(dst)) => edges.push((src, dst)),
            _ => return Err(anyhow!(
                "row {}: missing or out-of-range vertex id in columns {}/{}",
                row, source_column, target_column
            )),
        }
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn write_parquet(path: &Path, mut df: DataFrame) {
        let file = File::create(path).unwrap();
        ParquetWriter::new(file).finish(&mut df).unwrap();
    }

    #[test]
    fn test_load_integer_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.parquet");
        let df = df!(
            "src" => &[0i64, 0, 1, 1],
            "dst" => &[1i64, 2, 2, 3],
            "weight" => &[1.0f64, 1.0, 1.0, 1.0]
        ).unwrap();
        write_parquet(&path, df);

        let edges = load_edges(&path, "src", "dst").unwrap();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_negative_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.parquet");
        let df = df!("a" => &[0i64, -4], "b" => &[1i64, 2]).unwrap();
        write_parquet(&path, df);

        let err = load_edges(&path, "a", "b").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_edges(Path::new("/nonexistent/edges.parquet"), "src", "dst").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
