use crate::core::selector::relative_label;
use crate::domain::models::{CombinedOutput, FileRecord};
use log::debug;
use std::path::{Path, PathBuf};

const BLOCK_SEPARATOR: &str = "\n\n";

fn canonical_or_raw(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Label shown in the delimiters: the path relative to `root`, or the bare
/// file name for records that live elsewhere.
pub fn label_for(path: &Path, root: &Path) -> String {
    if let Some(rel) = relative_label(path, root) {
        return rel;
    }
    if let Some(rel) = relative_label(&canonical_or_raw(path), &canonical_or_raw(root)) {
        return rel;
    }

    debug!("{} is outside {}, labelling by file name", path.display(), root.display());
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().replace('\\', "/"))
}

pub fn combine(records: &[FileRecord], root: &Path) -> CombinedOutput {
    debug!("Combining {} files", records.len());
    let mut parts: Vec<String> = Vec::with_capacity(records.len() * 3);

    for record in records {
        let label = label_for(&record.path, root);
        parts.push(format!("=== FILE START: {} ===", label));
        parts.push(record.contents.clone());
        parts.push(format!("=== FILE END: {} ===", label));
    }

    CombinedOutput {
        text: parts.join(BLOCK_SEPARATOR),
    }
}
