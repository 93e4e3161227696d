// src/config/mod.rs
//! Configuration system for secret-envelope
//!
//! TOML file + environment overrides, loaded once by the embedding process
//! and passed in explicitly. There is no global config.

pub use app::{Batch, Config, Features, Keys, Tokens, CONFIG_PATH_ENV, MASTER_KEY_ENV, WORKERS_ENV};

mod app;
mod defaults;
