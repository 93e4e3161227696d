// src/crypto/decrypt.rs
use zeroize::Zeroizing;

use super::cipher::open;
use super::envelope::{decode_base64, Envelope};
use super::kdf::derive_key_for;
use crate::error::{EncryptionError, Result};
use crate::key_ops::MasterKey;

/// Authenticate and decrypt one parsed envelope
pub fn open_envelope(envelope: &Envelope, key: &MasterKey) -> Result<Zeroizing<Vec<u8>>> {
    let derived = derive_key_for(envelope.version, key.as_bytes(), &envelope.salt);
    open(&derived, &envelope.iv, &envelope.ciphertext, &envelope.tag)
}

/// Raw envelope bytes → plaintext bytes
///
/// A v1 candidate that fails authentication is retried under the legacy
/// layout before giving up; see [`Envelope::parse`]. A wrong key or a
/// tampered v1 envelope therefore costs two key derivations, and so does
/// each failed item in [`crate::CryptoPool::rotate_all`].
pub fn decrypt_to_vec(envelope: &[u8], key: &MasterKey) -> Result<Zeroizing<Vec<u8>>> {
    let parsed = Envelope::parse(envelope)?;
    match open_envelope(&parsed, key) {
        Err(EncryptionError::Authentication) => match parsed.legacy_fallback() {
            Some(legacy) => open_envelope(&legacy, key),
            None => Err(EncryptionError::Authentication),
        },
        other => other,
    }
}

/// Base64 envelope → plaintext string.
///
/// An empty envelope string yields `None`.
pub fn decrypt_with_key(envelope: &str, key: &MasterKey) -> Result<Option<String>> {
    if envelope.is_empty() {
        return Ok(None);
    }

    let bytes = decode_base64(envelope)?;
    let mut plaintext = decrypt_to_vec(&bytes, key).inspect_err(|err| {
        if matches!(err, EncryptionError::Authentication) {
            tracing::warn!(envelope_len = bytes.len(), "envelope failed authentication");
        }
    })?;

    // moves the buffer out instead of copying it
    Ok(Some(String::from_utf8(std::mem::take(&mut *plaintext))?))
}
