// src/token_ops.rs
//! CSPRNG-backed tokens and prefixed API keys
//!
//! Uniqueness comes from entropy alone; nothing here keeps a registry.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::aliases::{RandomApiToken24, SecureRandomExt};
use crate::hash_ops::hash;

/// `byte_len` random bytes as `2 * byte_len` lowercase hex characters
pub fn generate_secure_token(byte_len: usize) -> String {
    let mut bytes = Zeroizing::new(vec![0u8; byte_len]);
    rand::rng().fill_bytes(bytes.as_mut_slice());
    hex::encode(bytes.as_slice())
}

/// `prefix` followed by a 192-bit secure token (48 hex characters)
pub fn generate_api_key(prefix: &str) -> String {
    let body = RandomApiToken24::random_hex();
    format!("{prefix}{}", body.expose_secret())
}

/// A freshly issued API key and the digest to persist in its place
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Shown to the user once, never stored
    pub key: String,
    /// `hash_ops::hash(key)`, safe to store and look up by
    pub hash: String,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("key", &"[REDACTED]")
            .field("hash", &self.hash)
            .finish()
    }
}

/// Generate an API key together with its storage hash
pub fn generate_token_pair(prefix: &str) -> IssuedToken {
    let key = generate_api_key(prefix);
    let hash = hash(&key);
    IssuedToken { key, hash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::API_KEY_TOKEN_BYTES;
    use crate::hash_ops::verify_hash;

    #[test]
    fn token_length_is_twice_byte_len() {
        assert_eq!(generate_secure_token(32).len(), 64);
        assert_eq!(generate_secure_token(16).len(), 32);
        assert_eq!(generate_secure_token(0), "");
    }

    #[test]
    fn tokens_are_hex_and_unique() {
        let a = generate_secure_token(32);
        let b = generate_secure_token(32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn api_key_has_prefix_and_192_bit_body() {
        let key = generate_api_key("sk_live_");
        assert!(key.starts_with("sk_live_"));
        assert_eq!(key.len(), "sk_live_".len() + 2 * API_KEY_TOKEN_BYTES);
        assert!(key["sk_live_".len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, generate_api_key("sk_live_"));
    }

    #[test]
    fn api_key_without_prefix() {
        assert_eq!(generate_api_key("").len(), 48);
    }

    #[test]
    fn token_pair_hash_matches_key() {
        let issued = generate_token_pair("pk_");
        assert!(issued.key.starts_with("pk_"));
        assert!(verify_hash(&issued.key, &issued.hash));
        assert!(!format!("{issued:?}").contains(&issued.key));
    }
}
