use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReposplatError {
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternCompile { pattern: String, reason: String },

    #[error("Cannot use '{}' as repository root: {reason}", .path.display())]
    PathResolution { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    Decode { path: PathBuf },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReposplatError>;
