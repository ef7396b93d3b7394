use std::io::Write;

use log::LevelFilter;

use crate::models::Config;

/// Route log records to stderr as `[LEVEL] message` lines.
///
/// Warnings are shown by default, `RUST_LOG` overrides that and debug mode
/// enables everything down to debug.
pub fn init_logging(config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if config.debug_mode {
        builder.filter_level(LevelFilter::Debug);
    }
    // A logger may already be installed when embedded
    let _ = builder.try_init();
}
