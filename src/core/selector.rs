use crate::core::pattern_matcher::PatternSet;
use crate::error::Result;
use log::{debug, info, warn};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Expresses `path` relative to `root` with forward slashes, or `None` when
/// `path` does not live under `root`.
pub fn relative_label(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

pub fn should_include(
    path: &Path,
    root: &Path,
    include: &PatternSet,
    exclude: &PatternSet,
) -> bool {
    let Some(rel) = relative_label(path, root) else {
        debug!("Rejecting {}: not under {}", path.display(), root.display());
        return false;
    };

    let included = include.matches(&rel);
    let excluded = exclude.matches(&rel);
    if included && excluded {
        debug!("Excluded by pattern: {}", rel);
    }
    included && !excluded
}

/// Walks `root` (already resolved) and returns the absolute paths of every
/// regular file accepted by the include and exclude sets, in walk order.
pub fn select(root: &Path, include: &PatternSet, exclude: &PatternSet) -> Result<Vec<PathBuf>> {
    info!("Scanning for files in {}", root.display());
    debug!("Include patterns: {:?}", include.patterns());
    debug!("Exclude patterns: {:?}", exclude.patterns());

    let mut result = Vec::new();
    let mut scanned = 0usize;

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        scanned += 1;

        let path = entry.path();
        if should_include(path, root, include, exclude) {
            debug!("Found matching file: {}", path.display());
            result.push(path.to_path_buf());
        }
    }

    info!("Found {} matching files out of {} scanned", result.len(), scanned);
    Ok(result)
}
