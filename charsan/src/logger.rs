// charsan/src/logger.rs
//! Logger initialization for the charsan binary.

use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// With `Some(level)` the level applies to every target and `RUST_LOG` is
/// ignored. With `None` the filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
