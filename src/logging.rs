// src/logging.rs
use log::LevelFilter;

use crate::cli::LoggingOptions;

/// `-q` wins; otherwise each `-v` raises the level one step from `warn`.
pub fn level_filter(options: &LoggingOptions) -> LevelFilter {
    if options.quiet {
        return LevelFilter::Error;
    }
    match options.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` overrides the CLI level.
pub fn init(options: &LoggingOptions) {
    let default_level = level_filter(options).to_string().to_ascii_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
