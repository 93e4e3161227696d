// src/service.rs
//! Encrypt/decrypt façade bound to the process master key
//!
//! Build one `EncryptionService` at startup and share it by reference. It
//! holds the only copy of the master key the rest of the process needs.

use crate::config::Config;
use crate::consts::SELF_TEST_CANARY_PREFIX;
use crate::crypto::{decrypt_with_key, encrypt_with_key, rotate_key};
use crate::error::{EncryptionError, Result};
use crate::key_ops::MasterKey;

#[derive(Debug, Clone)]
pub struct EncryptionService {
    master_key: MasterKey,
}

impl EncryptionService {
    pub fn new(master_key: MasterKey) -> Self {
        Self { master_key }
    }

    /// Resolve the master key from `config` and, if enabled, run the
    /// self-test. Any failure here should keep the process from serving.
    pub fn from_config(config: &Config) -> Result<Self> {
        let service = Self::new(config.master_key()?);
        startup_gate(config.features.verify_on_startup, || {
            service.verify_encryption()
        })?;
        tracing::info!(
            self_test = config.features.verify_on_startup,
            "encryption service ready"
        );
        Ok(service)
    }

    pub fn master_key(&self) -> &MasterKey {
        &self.master_key
    }

    /// Encrypt under the master key. Empty input → `None`.
    pub fn encrypt(&self, plaintext: &str) -> Result<Option<String>> {
        encrypt_with_key(plaintext, &self.master_key)
    }

    /// `None` or empty input → `None`
    pub fn encrypt_optional(&self, plaintext: Option<&str>) -> Result<Option<String>> {
        match plaintext {
            Some(value) => self.encrypt(value),
            None => Ok(None),
        }
    }

    /// Decrypt under the master key. Empty input → `None`.
    pub fn decrypt(&self, envelope: &str) -> Result<Option<String>> {
        decrypt_with_key(envelope, &self.master_key)
    }

    /// `None` or empty input → `None`
    pub fn decrypt_optional(&self, envelope: Option<&str>) -> Result<Option<String>> {
        match envelope {
            Some(value) => self.decrypt(value),
            None => Ok(None),
        }
    }

    /// Re-encrypt an envelope held under this service's key for `new_key`
    pub fn rotate_to(&self, envelope: &str, new_key: &MasterKey) -> Result<Option<String>> {
        rotate_key(envelope, &self.master_key, new_key)
    }

    /// Round-trip a timestamped canary. Never panics or propagates errors;
    /// any failure is logged and reported as `false`.
    pub fn verify_encryption(&self) -> bool {
        let canary = format!("{SELF_TEST_CANARY_PREFIX}{}", chrono::Utc::now().to_rfc3339());
        round_trip_canary(&canary, |p| self.encrypt(p), |e| self.decrypt(e))
    }
}

/// Fail with `Configuration` when the self-test is enabled and does not pass
fn startup_gate(enabled: bool, self_test: impl FnOnce() -> bool) -> Result<()> {
    if enabled && !self_test() {
        return Err(EncryptionError::Configuration(
            "encryption self-test failed".into(),
        ));
    }
    Ok(())
}

fn round_trip_canary(
    canary: &str,
    encrypt: impl FnOnce(&str) -> Result<Option<String>>,
    decrypt: impl FnOnce(&str) -> Result<Option<String>>,
) -> bool {
    let outcome = encrypt(canary).and_then(|envelope| match envelope {
        Some(envelope) => decrypt(&envelope),
        None => Ok(None),
    });

    match outcome {
        Ok(Some(decrypted)) if decrypted == canary => true,
        Ok(_) => {
            tracing::error!("encryption self-test: round-trip mismatch");
            false
        }
        Err(err) => {
            tracing::error!(error = %err, "encryption self-test failed");
            false
        }
    }
}
