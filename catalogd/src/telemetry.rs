//! Tracing initialization.
//!
//! Sets up a fmt subscriber with an env-filter. The filter defaults to
//! `info` and is overridden with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
