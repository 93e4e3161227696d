// src/logging.rs
//! Optional tracing-subscriber bootstrap (feature `logging`)

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber honoring `RUST_LOG` (default `info`).
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Install a fmt subscriber with an explicit filter directive
pub fn init_with(directive: &str) {
    install(EnvFilter::new(directive));
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
