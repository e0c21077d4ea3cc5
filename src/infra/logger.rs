use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

pub const LOG_LEVEL_ENV: &str = "REPOSPLAT_LOG_LEVEL";

/// Warnings are always shown so skipped files and walk errors never go
/// unreported; each `-v` adds one level of detail.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "31", // Red
        Level::Warn => "33",  // Yellow
        Level::Info => "32",  // Green
        Level::Debug => "36", // Cyan
        Level::Trace => "35", // Magenta
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = level_for_verbosity(verbosity);
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level.as_str());
    let show_module = level >= LevelFilter::Debug;

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(move |buf, record| {
            let color = level_color(record.level());
            if show_module {
                writeln!(
                    buf,
                    "\x1B[{}m[{}]\x1B[0m [{}] {}: {}",
                    color,
                    record.level(),
                    buf.timestamp(),
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "\x1B[{}m[{}]\x1B[0m {}",
                    color,
                    record.level(),
                    record.args()
                )
            }
        })
        .format_timestamp_secs()
        .try_init()
}
