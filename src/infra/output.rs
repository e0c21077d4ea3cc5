use crate::domain::defaults::OUTPUT_EXTENSION;
use crate::domain::models::CombinedOutput;
use crate::error::{ReposplatError, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        debug!("Writing output to file: {}", self.path.display());
        fs::write(&self.path, content).map_err(|source| ReposplatError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        info!("Output written to file: {} ({} bytes)", self.path.display(), content.len());
        Ok(())
    }
}

/// Forces the destination to carry the text extension, replacing whatever
/// extension it had (`combined` -> `combined.txt`, `out.md` -> `out.txt`).
pub fn resolve_output_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == OUTPUT_EXTENSION => path.to_path_buf(),
        _ => path.with_extension(OUTPUT_EXTENSION),
    }
}

/// Writes the combined text to `destination` made absolute, overwriting any
/// existing file. Parent directories are not created.
pub fn write_output(output: &CombinedOutput, destination: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(destination).map_err(|source| ReposplatError::FileWrite {
        path: destination.to_path_buf(),
        source,
    })?;

    let writer = FileWriter::new(absolute);
    writer.write(&output.text)?;
    Ok(writer.path().to_path_buf())
}
