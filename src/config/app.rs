// src/config/app.rs
use std::path::Path;

use serde::Deserialize;

use super::defaults::*;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::error::{EncryptionError, Result};
use crate::key_ops::MasterKey;
use crate::token_ops::{generate_secure_token, generate_token_pair, IssuedToken};

/// Path of the TOML config file
pub const CONFIG_PATH_ENV: &str = "SECRET_ENVELOPE_CONFIG";
/// Overrides `keys.master_key`
pub const MASTER_KEY_ENV: &str = "SECRET_ENVELOPE_MASTER_KEY";
/// Overrides `batch.worker_threads`
pub const WORKERS_ENV: &str = "SECRET_ENVELOPE_WORKERS";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_keys")]
    pub keys: Keys,
    #[serde(default = "default_tokens")]
    pub tokens: Tokens,
    #[serde(default = "default_batch")]
    pub batch: Batch,
    #[serde(default = "default_features")]
    pub features: Features,
}

#[derive(Clone, Deserialize)]
pub struct Keys {
    #[serde(default)]
    pub master_key: Option<String>,
}

impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let master_key = self.master_key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Keys")
            .field("master_key", &master_key)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tokens {
    #[serde(default = "default_api_key_prefix")]
    pub api_key_prefix: String,
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
}

impl Tokens {
    /// Secure token of the configured size
    pub fn secure_token(&self) -> String {
        generate_secure_token(self.token_bytes)
    }

    /// API key with the configured prefix, plus the hash to store
    pub fn issue_api_key(&self) -> IssuedToken {
        generate_token_pair(&self.api_key_prefix)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Batch {
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    #[serde(default = "default_verify_on_startup")]
    pub verify_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keys: default_keys(),
            tokens: default_tokens(),
            batch: default_batch(),
            features: default_features(),
        }
    }
}

impl Config {
    /// Load from `$SECRET_ENVELOPE_CONFIG` (or `secret-envelope.toml`), then
    /// apply environment overrides. Call once at startup.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(&config_path)?.with_overrides(|name| std::env::var(name).ok())
    }

    /// Load a TOML file; a missing file falls back to built-in defaults
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using built-in defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|err| {
            EncryptionError::Configuration(format!("reading {}: {err}", path.display()))
        })?;
        let conf = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(conf)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`Config::load`]). Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(key) = lookup(MASTER_KEY_ENV).filter(|v| !v.is_empty()) {
            self.keys.master_key = Some(key);
        }

        if let Some(raw) = lookup(WORKERS_ENV).filter(|v| !v.is_empty()) {
            self.batch.worker_threads = raw.trim().parse().map_err(|_| {
                EncryptionError::Configuration(format!("{WORKERS_ENV} must be a positive integer"))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Key Resolver: the configured master key, validated.
    ///
    /// Fails with `Configuration` if the key is absent or shorter than 32
    /// characters. Treat a failure as fatal at startup.
    pub fn master_key(&self) -> Result<MasterKey> {
        let secret = self.keys.master_key.as_deref().ok_or_else(|| {
            EncryptionError::Configuration(format!(
                "master key not configured (set {MASTER_KEY_ENV} or keys.master_key)"
            ))
        })?;
        MasterKey::new(secret)
    }

    fn validate(&self) -> Result<()> {
        if self.batch.worker_threads == 0 {
            return Err(EncryptionError::Configuration(
                "batch.worker_threads must be at least 1".into(),
            ));
        }
        if self.tokens.token_bytes == 0 {
            return Err(EncryptionError::Configuration(
                "tokens.token_bytes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
