// tests/common.rs
//! Shared test utilities: logging setup and fixed keys

#![allow(dead_code)]

use secret_envelope::MasterKey;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Test-friendly logging; respects RUST_LOG. Idempotent.
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// A master key made of one repeated character, e.g. `key('A')` = "A"*32
pub fn key(c: char) -> MasterKey {
    MasterKey::new(c.to_string().repeat(32)).expect("32-char key is valid")
}
