// wordveil/src/logger.rs
//! Logging bootstrap for the wordveil binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level` overrides whatever `RUST_LOG` says; with `None` the
/// environment decides. Safe to call more than once (later calls are no-ops).
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default());
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
