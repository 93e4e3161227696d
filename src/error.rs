// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;
use zeroize::Zeroize;

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// Messages never carry plaintext, derived keys or the master secret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncryptionError {
    /// Missing or unusable configuration. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input was never produced by this crate, or has been truncated.
    #[error("malformed envelope: {0}")]
    Format(String),

    /// Tag mismatch: tampering, wrong key, or corruption.
    #[error("authentication failed: envelope was tampered with or the key is wrong")]
    Authentication,

    #[error("cipher failure: {0}")]
    Cipher(String),
}

impl From<base64::DecodeError> for EncryptionError {
    fn from(err: base64::DecodeError) -> Self {
        EncryptionError::Format(format!("invalid base64: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for EncryptionError {
    /// The rejected bytes are authenticated plaintext; they are wiped here.
    fn from(err: std::string::FromUtf8Error) -> Self {
        let mut rejected = err.into_bytes();
        rejected.zeroize();
        EncryptionError::Format("decrypted value is not valid UTF-8".into())
    }
}

impl From<toml::de::Error> for EncryptionError {
    fn from(err: toml::de::Error) -> Self {
        EncryptionError::Configuration(format!("invalid TOML: {err}"))
    }
}

impl From<rayon::ThreadPoolBuildError> for EncryptionError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        EncryptionError::Configuration(format!("worker pool: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_becomes_format_error() {
        let err = String::from_utf8(vec![0xff, 0xfe, 0xfd]).unwrap_err();
        assert_eq!(
            EncryptionError::from(err),
            EncryptionError::Format("decrypted value is not valid UTF-8".into())
        );
    }

    #[test]
    fn foreign_errors_map_to_kinds() {
        let err: EncryptionError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, EncryptionError::Configuration(_)));
        assert_eq!(
            EncryptionError::Authentication.to_string(),
            "authentication failed: envelope was tampered with or the key is wrong"
        );
    }
}
