// tests/property_tests.rs
//! Properties over arbitrary input. Each case pays for PBKDF2, so the case
//! count is kept low.

mod common;
use common::key;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;
use secret_envelope::crypto::{decrypt_with_key, encrypt_with_key};
use secret_envelope::{hash, EncryptionError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn roundtrip(plaintext in "\\PC{1,200}") {
        let k = key('P');
        let envelope = encrypt_with_key(&plaintext, &k).unwrap().unwrap();
        let decrypted = decrypt_with_key(&envelope, &k).unwrap();
        prop_assert_eq!(decrypted.as_deref(), Some(plaintext.as_str()));
    }

    #[test]
    fn ciphertext_length_matches_plaintext(plaintext in "[a-z0-9]{1,64}") {
        let envelope = encrypt_with_key(&plaintext, &key('P')).unwrap().unwrap();
        let decoded = STANDARD.decode(envelope).unwrap();
        prop_assert_eq!(decoded.len(), 65 + plaintext.len());
    }

    #[test]
    fn any_flipped_byte_is_rejected(offset in 0usize..1000, bit in 0u8..8) {
        let k = key('P');
        let envelope = encrypt_with_key("tamper-target", &k).unwrap().unwrap();
        let mut bytes = STANDARD.decode(envelope).unwrap();
        let index = offset % bytes.len();
        bytes[index] ^= 1 << bit;
        let result = decrypt_with_key(&STANDARD.encode(bytes), &k);
        prop_assert_eq!(result, Err(EncryptionError::Authentication));
    }
}

proptest! {
    #[test]
    fn hash_is_deterministic(value in ".*") {
        prop_assert_eq!(hash(&value), hash(&value));
        prop_assert_eq!(hash(&value).len(), 64);
    }

    #[test]
    fn hash_distinguishes_values(a in ".{0,64}", b in ".{0,64}") {
        prop_assume!(a != b);
        prop_assert_ne!(hash(&a), hash(&b));
    }
}
