// src/crypto/kdf.rs
//! Key derivation: (master secret, salt) → one-time AES-256 key

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::aliases::DerivedKey32;
use crate::consts::{KDF_ITERATIONS, KEY_LEN};
use crate::enums::EnvelopeVersion;

/// PBKDF2-HMAC-SHA256, 100,000 iterations, 32-byte output.
///
/// Deterministic: decryption re-derives the exact encryption key from the
/// salt stored in the envelope.
pub fn derive_key(secret: &[u8], salt: &[u8]) -> DerivedKey32 {
    derive_key_with_iterations(secret, salt, KDF_ITERATIONS)
}

/// Derive with the parameters pinned to an envelope version
pub(crate) fn derive_key_for(version: EnvelopeVersion, secret: &[u8], salt: &[u8]) -> DerivedKey32 {
    derive_key_with_iterations(secret, salt, version.kdf_iterations())
}

fn derive_key_with_iterations(secret: &[u8], salt: &[u8], iterations: u32) -> DerivedKey32 {
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut out[..]);
    DerivedKey32::new(*out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pbkdf2_known_vector() {
        // PBKDF2-HMAC-SHA256("password", "salt", c = 1, dkLen = 32)
        let key = derive_key_with_iterations(b"password", b"salt", 1);
        assert_eq!(
            hex::encode(key.expose_secret()),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn derive_is_deterministic() {
        let salt = [7u8; 32];
        let k1 = derive_key(b"same-master-secret-for-both-calls", &salt);
        let k2 = derive_key(b"same-master-secret-for-both-calls", &salt);
        assert_eq!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn different_salts_give_different_keys() {
        let k1 = derive_key(b"same-master-secret-for-both-calls", &[1u8; 32]);
        let k2 = derive_key(b"same-master-secret-for-both-calls", &[2u8; 32]);
        assert_ne!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn different_secrets_give_different_keys() {
        let salt = [3u8; 32];
        let k1 = derive_key(b"master-secret-a-aaaaaaaaaaaaaaaaaa", &salt);
        let k2 = derive_key(b"master-secret-b-bbbbbbbbbbbbbbbbbb", &salt);
        assert_ne!(k1.expose_secret(), k2.expose_secret());
    }

    #[test]
    fn version_parameters_match_default() {
        let salt = [9u8; 32];
        let k1 = derive_key(b"versioned-secret-0123456789abcdef", &salt);
        let k2 = derive_key_for(
            EnvelopeVersion::V1,
            b"versioned-secret-0123456789abcdef",
            &salt,
        );
        assert_eq!(k1.expose_secret(), k2.expose_secret());
    }
}
