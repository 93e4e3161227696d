// src/crypto/rotate.rs
use super::{decrypt_with_key, encrypt_with_key};
use crate::error::Result;
use crate::key_ops::MasterKey;

/// Pure in-memory key rotation: decrypt under `old`, re-encrypt under `new`
///
/// If decryption fails nothing is produced, and the caller must keep the
/// stored envelope as it is. Persisting the returned envelope is the
/// caller's job. An empty envelope rotates to `None`.
pub fn rotate_key(envelope: &str, old: &MasterKey, new: &MasterKey) -> Result<Option<String>> {
    let Some(plaintext) = decrypt_with_key(envelope, old)? else {
        return Ok(None);
    };
    let plaintext = zeroize::Zeroizing::new(plaintext);
    let rotated = encrypt_with_key(&plaintext, new)?;
    tracing::info!("envelope re-encrypted under new master key");
    Ok(rotated)
}
