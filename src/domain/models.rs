use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedOutput {
    pub text: String,
}

/// What the loader does with a selected file it cannot read as UTF-8 text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    #[default]
    Abort,
    SkipAndWarn,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root_path: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub output_path: PathBuf,
    pub read_policy: ReadPolicy,
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
    pub output_path: PathBuf,
}
