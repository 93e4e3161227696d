// src/lib.rs
//! secret-envelope: encryption-at-rest for stored credentials
//!
//! Features:
//! - PBKDF2-HMAC-SHA256 per-envelope key derivation (100k iterations)
//! - AES-256-GCM authenticated envelopes, versioned, base64 transport
//! - Key rotation (single and batched on a bounded worker pool)
//! - SHA-256 token hashing, CSPRNG tokens and prefixed API keys
//! - Startup self-test
//!
//! Envelope layout (version 1):
//!
//! ```text
//! version[1] ‖ salt[32] ‖ iv[16] ‖ tag[16] ‖ ciphertext[n]
//! ```

pub mod aliases;
pub mod batch;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod hash_ops;
pub mod key_ops;
#[cfg(feature = "logging")]
pub mod logging;
pub mod service;
pub mod token_ops;

// Re-export everything callers need at the crate root
pub use batch::CryptoPool;
pub use config::Config;
pub use crypto::{decrypt_with_key, encrypt_with_key, rotate_key, upgrade_legacy};
pub use enums::EnvelopeVersion;
pub use error::{EncryptionError, Result};
pub use hash_ops::{hash, verify_hash};
pub use key_ops::{generate_master_secret, MasterKey};
pub use service::EncryptionService;
pub use token_ops::{generate_api_key, generate_secure_token, generate_token_pair, IssuedToken};
