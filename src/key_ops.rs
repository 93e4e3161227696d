// src/key_ops.rs
//! Master key validation and generation
//!
//! A `MasterKey` can only exist if its secret passed validation, so every
//! encrypt/decrypt entry point takes one instead of a raw string.

use zeroize::Zeroizing;

use crate::aliases::{MasterSecret, RandomMasterSecret32, SecureRandomExt};
use crate::consts::MIN_MASTER_KEY_LEN;
use crate::error::{EncryptionError, Result};

/// Validated master secret. Zeroized on drop, never printed.
pub struct MasterKey {
    secret: MasterSecret,
}

impl MasterKey {
    /// Fails with `Configuration` if the secret is shorter than 32 characters
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = Zeroizing::new(secret.into());
        let len = secret.chars().count();
        if len < MIN_MASTER_KEY_LEN {
            return Err(EncryptionError::Configuration(format!(
                "master key must be at least {MIN_MASTER_KEY_LEN} characters, got {len}"
            )));
        }
        Ok(Self {
            secret: MasterSecret::new(String::clone(&secret)),
        })
    }

    /// Raw secret bytes fed into the KDF
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

impl Clone for MasterKey {
    fn clone(&self) -> Self {
        Self {
            secret: MasterSecret::new(self.secret.expose_secret().clone()),
        }
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh master secret: 32 random bytes as 64 hex characters
pub fn generate_master_secret() -> String {
    RandomMasterSecret32::random_hex().expose_secret().clone()
}
