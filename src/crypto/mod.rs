// src/crypto/mod.rs
//! Pure cryptographic operations (no I/O, no global state)
//!
//! Everything works on in-memory buffers and an explicit [`MasterKey`].
//!
//! [`MasterKey`]: crate::key_ops::MasterKey
mod cipher;
mod decrypt;
mod encrypt;
pub mod envelope;
pub mod kdf;
mod legacy;
mod rotate;

pub use decrypt::{decrypt_to_vec, decrypt_with_key, open_envelope};
pub use encrypt::{encrypt_to_vec, encrypt_with_key, seal_envelope};
pub use envelope::{envelope_version, is_envelope, Envelope};
pub use kdf::derive_key;
pub use legacy::{needs_upgrade, upgrade_legacy};
pub use rotate::rotate_key;
