//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use anyhow::Result;
use serde::Serialize;
use serde_json::{json, to_string_pretty, Value};
use crate::config::Mode;
use crate::rank::Ranking;

/// JSON document describing one ranking result
pub fn ranking_json<T: Serialize>(ranking: &Ranking<T>, mode: Mode) -> Value {
    json!({
        "vertex": ranking.vertex,
        "mode": mode,
        "requested": ranking.requested,
        "returned": ranking.effective(),
        "available": ranking.available,
        "clamped": ranking.is_clamped(),
        "entries": ranking.entries,
    })
}

/// Save a ranking result as pretty-printed JSON
pub fn save_ranking<T: Serialize>(ranking: &Ranking<T>, mode: Mode, path: &Path) -> Result<()> {
    log::info!("Saving ranking for vertex {} to {}", ranking.vertex, path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&ranking_json(ranking, mode))?.as_bytes())?;

    Ok(())
}
