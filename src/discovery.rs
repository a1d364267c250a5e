// src/discovery.rs
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects every `*.xml` file under `root`.
///
/// Paths are sorted lexicographically so multi-file aggregation is
/// deterministic regardless of the platform's directory order.
///
/// # Errors
/// Returns an error if a directory entry cannot be read.
pub fn collect_xml_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "xml") {
            paths.push(entry.path().to_path_buf());
        } else if config.verbose {
            println!("Skipping non-XML file {}", entry.path().display());
        }
    }

    paths.sort();
    Ok(paths)
}
