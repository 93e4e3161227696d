// src/crypto/cipher.rs
//! AES-256-GCM with a 16-byte IV and a detached 16-byte tag
//!
//! The envelope stores the tag separately from the ciphertext, so the
//! in-place detached API is used rather than `Aead::encrypt`, which appends
//! the tag. No associated data.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Key, Nonce, Tag};
use zeroize::Zeroizing;

use crate::aliases::DerivedKey32;
use crate::consts::{IV_LEN, TAG_LEN};
use crate::error::{EncryptionError, Result};

/// AES-256-GCM parameterized for 128-bit nonces
type Aes256GcmIv16 = AesGcm<Aes256, U16>;

fn cipher_for(key: &DerivedKey32) -> Aes256GcmIv16 {
    Aes256GcmIv16::new(Key::<Aes256GcmIv16>::from_slice(key.expose_secret().as_slice()))
}

/// Encrypt `plaintext`, returning `(ciphertext, tag)`
pub(crate) fn seal(
    key: &DerivedKey32,
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = cipher_for(key);
    let mut buffer = Zeroizing::new(plaintext.to_vec());
    let tag = cipher
        .encrypt_in_place_detached(Nonce::<U16>::from_slice(iv), b"", buffer.as_mut_slice())
        .map_err(|_| EncryptionError::Cipher("AES-GCM refused the plaintext (length limit)".into()))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());
    // buffer now holds ciphertext only
    Ok((std::mem::take(&mut *buffer), tag_bytes))
}

/// Verify `tag` and decrypt. Nothing is returned unless the tag matches.
pub(crate) fn open(
    key: &DerivedKey32,
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = cipher_for(key);
    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::<U16>::from_slice(iv),
            b"",
            buffer.as_mut_slice(),
            Tag::<U16>::from_slice(tag),
        )
        .map_err(|_| EncryptionError::Authentication)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> DerivedKey32 {
        DerivedKey32::new([byte; 32])
    }

    #[test]
    fn seal_then_open() {
        let iv = [5u8; IV_LEN];
        let (ct, tag) = seal(&key(1), &iv, b"connected-account-token").unwrap();
        assert_eq!(ct.len(), b"connected-account-token".len());
        let pt = open(&key(1), &iv, &ct, &tag).unwrap();
        assert_eq!(pt.as_slice(), b"connected-account-token");
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let iv = [5u8; IV_LEN];
        let (ct, tag) = seal(&key(1), &iv, b"value").unwrap();
        assert_eq!(
            open(&key(2), &iv, &ct, &tag).unwrap_err(),
            EncryptionError::Authentication
        );
    }

    #[test]
    fn wrong_iv_fails_authentication() {
        let (ct, tag) = seal(&key(1), &[5u8; IV_LEN], b"value").unwrap();
        assert!(open(&key(1), &[6u8; IV_LEN], &ct, &tag).is_err());
    }

    #[test]
    fn flipped_tag_fails_authentication() {
        let iv = [0u8; IV_LEN];
        let (ct, mut tag) = seal(&key(3), &iv, b"value").unwrap();
        tag[0] ^= 0x01;
        assert_eq!(
            open(&key(3), &iv, &ct, &tag).unwrap_err(),
            EncryptionError::Authentication
        );
    }

    #[test]
    fn empty_plaintext_still_authenticates() {
        let iv = [1u8; IV_LEN];
        let (ct, tag) = seal(&key(4), &iv, b"").unwrap();
        assert!(ct.is_empty());
        assert!(open(&key(4), &iv, &ct, &tag).unwrap().is_empty());
    }
}
