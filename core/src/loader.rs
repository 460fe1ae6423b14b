use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::ast::AnalysisUnit;

/// Read one JSON unit dump.
pub fn load_unit<P: AsRef<Path>>(path: P) -> Result<AnalysisUnit> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read unit dump: {:?}", path))?;
    AnalysisUnit::from_json(&content)
        .with_context(|| format!("Failed to parse unit dump: {:?}", path))
}

/// Every `*.json` dump below `path`, sorted by file path.
///
/// Dumps that fail to parse are skipped with a warning; I/O errors while
/// walking the directory are returned.
pub fn load_units_from_dir<P: AsRef<Path>>(path: P) -> Result<Vec<AnalysisUnit>> {
    let mut units = Vec::new();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        match load_unit(path) {
            Ok(unit) => units.push(unit),
            Err(e) => tracing::warn!("Skipping unit dump {:?}: {:#}", path, e),
        }
    }

    Ok(units)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
