// src/crypto/envelope.rs
//! Envelope codec: fixed-offset binary layout ↔ base64 string
//!
//! ```text
//! v1:      0x01 ‖ salt[32] ‖ iv[16] ‖ tag[16] ‖ ciphertext[n]
//! legacy:         salt[32] ‖ iv[16] ‖ tag[16] ‖ ciphertext[n]
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::{IV_LEN, LEGACY_HEADER_LEN, SALT_LEN, TAG_LEN};
use crate::enums::EnvelopeVersion;
use crate::error::{EncryptionError, Result};

/// One decoded envelope. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub version: EnvelopeVersion,
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Serialize to the binary layout of `self.version`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.version.header_len() + self.ciphertext.len());
        if let Some(marker) = self.version.marker() {
            out.push(marker);
        }
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Serialize and base64-encode (standard alphabet, padded)
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse bytes as a specific layout
    pub fn from_bytes(bytes: &[u8], version: EnvelopeVersion) -> Result<Self> {
        let header_len = version.header_len();
        if bytes.len() < header_len {
            return Err(EncryptionError::Format(format!(
                "{version} envelope needs at least {header_len} bytes, got {}",
                bytes.len()
            )));
        }

        let body = match version.marker() {
            Some(marker) if bytes[0] == marker => &bytes[1..],
            Some(_) => {
                return Err(EncryptionError::Format(format!(
                    "missing {version} version marker"
                )))
            }
            None => bytes,
        };

        let (salt, rest) = body.split_at(SALT_LEN);
        let (iv, rest) = rest.split_at(IV_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        Ok(Self {
            version,
            salt: to_array(salt),
            iv: to_array(iv),
            tag: to_array(tag),
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Parse bytes, picking the layout from the leading byte.
    ///
    /// A leading version marker with room for a full v1 header selects v1;
    /// anything else is read as legacy. Legacy salts are random, so a legacy
    /// envelope can also start with a marker byte; callers that fail to
    /// authenticate a v1 candidate retry it with [`Envelope::legacy_fallback`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < LEGACY_HEADER_LEN {
            return Err(EncryptionError::Format(format!(
                "envelope too short: {} bytes, need at least {LEGACY_HEADER_LEN}",
                bytes.len()
            )));
        }

        match EnvelopeVersion::from_marker(bytes[0]) {
            Some(version) if bytes.len() >= version.header_len() => {
                Self::from_bytes(bytes, version)
            }
            _ => Self::from_bytes(bytes, EnvelopeVersion::Legacy),
        }
    }

    /// Decode base64 and [`Envelope::parse`]
    pub fn decode(encoded: &str) -> Result<Self> {
        Self::parse(&decode_base64(encoded)?)
    }

    /// Reinterpret a versioned envelope's bytes under the legacy layout
    pub fn legacy_fallback(&self) -> Option<Self> {
        if self.version == EnvelopeVersion::Legacy {
            return None;
        }
        Self::from_bytes(&self.to_bytes(), EnvelopeVersion::Legacy).ok()
    }
}

/// Base64-decode an envelope string, ignoring surrounding whitespace
pub(crate) fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded.trim())?)
}

/// Version of an encoded envelope, if it decodes to a plausible layout.
///
/// Layout detection only; says nothing about whether the envelope
/// authenticates.
pub fn envelope_version(encoded: &str) -> Option<EnvelopeVersion> {
    Envelope::decode(encoded).ok().map(|env| env.version)
}

/// Whether the string decodes to a plausible envelope of any known layout
pub fn is_envelope(encoded: &str) -> bool {
    envelope_version(encoded).is_some()
}

fn to_array<const N: usize>(slice: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    out
}
