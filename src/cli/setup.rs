//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr so stdout carries only the report.

use log::LevelFilter;

/// Map the `-v` count to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides the
/// verbosity-derived level.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        // Already initialized (tests, embedding)
        eprintln!("Note: logger already configured: {}", e);
    }
}
