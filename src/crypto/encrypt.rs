// src/crypto/encrypt.rs
use super::cipher::seal;
use super::envelope::Envelope;
use super::kdf::derive_key_for;
use crate::aliases::{RandomIv16, RandomSalt32, SecureRandomExt};
use crate::consts::{IV_LEN, SALT_LEN};
use crate::enums::EnvelopeVersion;
use crate::error::Result;
use crate::key_ops::MasterKey;

/// Encrypt bytes into a current-version [`Envelope`].
///
/// Salt and IV are drawn fresh from the CSPRNG on every call, so the same
/// plaintext never produces the same envelope twice.
pub fn seal_envelope(plaintext: &[u8], key: &MasterKey) -> Result<Envelope> {
    let version = EnvelopeVersion::CURRENT;

    let salt: [u8; SALT_LEN] = **RandomSalt32::new();
    let iv: [u8; IV_LEN] = **RandomIv16::new();

    let derived = derive_key_for(version, key.as_bytes(), &salt);
    let (ciphertext, tag) = seal(&derived, &iv, plaintext)?;

    Ok(Envelope {
        version,
        salt,
        iv,
        tag,
        ciphertext,
    })
}

/// Encrypt bytes → raw envelope bytes (no base64)
pub fn encrypt_to_vec(plaintext: &[u8], key: &MasterKey) -> Result<Vec<u8>> {
    Ok(seal_envelope(plaintext, key)?.to_bytes())
}

/// Encrypt a string → base64 envelope.
///
/// An empty string means "no value" and yields `None`, not an envelope.
pub fn encrypt_with_key(plaintext: &str, key: &MasterKey) -> Result<Option<String>> {
    if plaintext.is_empty() {
        return Ok(None);
    }
    let envelope = seal_envelope(plaintext.as_bytes(), key)?;
    tracing::debug!(
        version = %envelope.version,
        ciphertext_len = envelope.ciphertext.len(),
        "value encrypted"
    );
    Ok(Some(envelope.encode()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_and_iv_are_fresh_per_envelope() {
        let key = MasterKey::new("S".repeat(32)).unwrap();
        let a = seal_envelope(b"same", &key).unwrap();
        let b = seal_envelope(b"same", &key).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.iv, b.iv);
        assert_ne!(a.salt, [0u8; SALT_LEN]);
        assert_ne!(a.iv, [0u8; IV_LEN]);
        assert_eq!(a.version, EnvelopeVersion::CURRENT);
    }
}
