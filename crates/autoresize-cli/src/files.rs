use anyhow::{Context, Result, bail};
use autoresize_engine::io;
use std::path::{Path, PathBuf};

/// Expands CLI inputs into a sorted, deduplicated list of markdown files.
///
/// Directories are scanned recursively, existing files are taken as given,
/// anything else is treated as a glob pattern.
pub fn collect_markdown_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let found = io::scan_markdown_files(path)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            files.extend(found);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            files.extend(expand_glob(input)?);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries =
        glob::glob(pattern).with_context(|| format!("Invalid path or pattern '{pattern}'"))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Failed to read a match of '{pattern}'"))?;
        if path.is_file() && io::is_markdown_file(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        bail!("No markdown files match '{pattern}'");
    }
    Ok(files)
}
