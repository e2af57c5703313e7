//! Logger setup
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level.

use log::LevelFilter;

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Later calls are ignored.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);
    // A logger may already be installed (tests, embedding); keep the first one
    let _ = builder.try_init();
}
