//! Diagnostic logging for the `sboard` binary.
//!
//! Events go to **stderr** so stdout stays parseable for scripts.
//! `RUST_LOG` wins when set; otherwise the `[log].filter` config value is
//! used, and `--verbose` raises the Studyboard crates to `debug`.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

pub fn init(config: &LogConfig, verbose: bool) {
    let fallback = if verbose {
        format!("{},studyboard=debug,studyboard_core=debug", config.filter)
    } else {
        config.filter.clone()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
