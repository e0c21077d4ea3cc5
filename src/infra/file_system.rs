use crate::domain::models::{FileRecord, ReadPolicy};
use crate::error::{ReposplatError, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonicalizes the repository root and checks that it is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|e| ReposplatError::PathResolution {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !resolved.is_dir() {
        return Err(ReposplatError::PathResolution {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    debug!("Resolved root {} to {}", root.display(), resolved.display());
    Ok(resolved)
}

pub fn read_file_contents(path: &Path) -> Result<String> {
    debug!("Reading file contents: {}", path.display());
    let bytes = fs::read(path).map_err(|source| ReposplatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = String::from_utf8(bytes).map_err(|_| ReposplatError::Decode {
        path: path.to_path_buf(),
    })?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

/// Reads every path in order. Under `ReadPolicy::Abort` the first failure ends
/// the run; under `ReadPolicy::SkipAndWarn` the file is dropped with a warning.
pub fn load_files(paths: &[PathBuf], policy: ReadPolicy) -> Result<Vec<FileRecord>> {
    info!("Loading {} files", paths.len());
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        match read_file_contents(path) {
            Ok(contents) => records.push(FileRecord {
                path: path.clone(),
                contents,
            }),
            Err(e) if policy == ReadPolicy::SkipAndWarn => {
                warn!("Skipping file: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    if records.len() < paths.len() {
        info!("Loaded {} of {} files", records.len(), paths.len());
    }
    Ok(records)
}
