use crate::core::combiner::combine;
use crate::core::pattern_matcher::PatternSet;
use crate::core::selector::select;
use crate::domain::defaults::{
    DEFAULT_EXCLUDES, DEFAULT_INCLUDES, DEFAULT_OUTPUT, to_owned_patterns,
};
use crate::domain::models::{ReadPolicy, RunConfig, RunSummary};
use crate::infra::file_system::{load_files, resolve_root};
use crate::infra::logger::setup_logger;
use crate::infra::output::{resolve_output_path, write_output};
use anyhow::Context;
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reposplat")]
#[command(about = "Combine repository files into one delimited text file", long_about = None)]
pub struct Cli {
    /// Path to the repository root
    pub repo_path: PathBuf,

    /// Glob patterns to include (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// File to write combined output to; the extension is always .txt
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Warn about and skip files that cannot be read as UTF-8 instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Order files by relative path instead of directory walk order
    #[arg(long)]
    pub sort: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let include_patterns = if self.include.is_empty() {
            to_owned_patterns(DEFAULT_INCLUDES)
        } else {
            self.include
        };
        let exclude_patterns = if self.exclude.is_empty() {
            to_owned_patterns(DEFAULT_EXCLUDES)
        } else {
            self.exclude
        };

        RunConfig {
            root_path: self.repo_path,
            include_patterns,
            exclude_patterns,
            output_path: resolve_output_path(&self.output),
            read_policy: if self.skip_unreadable {
                ReadPolicy::SkipAndWarn
            } else {
                ReadPolicy::Abort
            },
            sort: self.sort,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let config = cli.into_config();
    let summary = execute(&config)?;

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(
        stdout,
        "Wrote {} files to {}",
        summary.files_written,
        summary.output_path.display()
    )?;
    stdout.execute(ResetColor)?;
    Ok(())
}

/// Runs one select, load, combine, write pass. Patterns are compiled before
/// any file is touched and nothing is written unless every earlier stage succeeds.
pub fn execute(config: &RunConfig) -> anyhow::Result<RunSummary> {
    info!("Starting combine run");
    debug!("Run configuration: {:?}", config);

    let include = PatternSet::compile(config.include_patterns.as_slice())
        .context("Invalid include pattern")?;
    let exclude = PatternSet::compile(config.exclude_patterns.as_slice())
        .context("Invalid exclude pattern")?;

    let root = resolve_root(&config.root_path)?;

    let mut paths = select(&root, &include, &exclude)?;
    if config.sort {
        paths.sort();
    }

    let records = load_files(&paths, config.read_policy)?;

    info!("Building combined output");
    let combined = combine(&records, &root);

    let output_path = write_output(&combined, &config.output_path)
        .with_context(|| format!("Could not save combined output for {}", root.display()))?;

    Ok(RunSummary {
        files_written: records.len(),
        output_path,
    })
}
