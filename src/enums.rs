// src/enums.rs
//! Public enum types used throughout the crate

use crate::consts::{ENVELOPE_V1, KDF_ITERATIONS, LEGACY_HEADER_LEN, V1_HEADER_LEN};

/// Envelope layouts this crate can read
///
/// KDF and cipher parameters branch on this value, so a future change to
/// either only needs a new variant; envelopes already at rest stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum EnvelopeVersion {
    /// `salt ‖ iv ‖ tag ‖ ciphertext`, no marker. Read-only.
    Legacy,
    /// `0x01 ‖ salt ‖ iv ‖ tag ‖ ciphertext`
    #[default]
    V1,
}

impl EnvelopeVersion {
    /// The version every new envelope is written with
    pub const CURRENT: EnvelopeVersion = EnvelopeVersion::V1;

    /// Marker byte, `None` for the unversioned legacy layout
    pub fn marker(self) -> Option<u8> {
        match self {
            EnvelopeVersion::Legacy => None,
            EnvelopeVersion::V1 => Some(ENVELOPE_V1),
        }
    }

    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            ENVELOPE_V1 => Some(EnvelopeVersion::V1),
            _ => None,
        }
    }

    pub fn kdf_iterations(self) -> u32 {
        match self {
            EnvelopeVersion::Legacy | EnvelopeVersion::V1 => KDF_ITERATIONS,
        }
    }

    /// Bytes before the ciphertext starts
    pub fn header_len(self) -> usize {
        match self {
            EnvelopeVersion::Legacy => LEGACY_HEADER_LEN,
            EnvelopeVersion::V1 => V1_HEADER_LEN,
        }
    }
}

impl std::fmt::Display for EnvelopeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvelopeVersion::Legacy => f.write_str("legacy"),
            EnvelopeVersion::V1 => f.write_str("v1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_roundtrips_for_versioned_layouts() {
        let marker = EnvelopeVersion::V1.marker().unwrap();
        assert_eq!(EnvelopeVersion::from_marker(marker), Some(EnvelopeVersion::V1));
        assert_eq!(EnvelopeVersion::Legacy.marker(), None);
        assert_eq!(EnvelopeVersion::from_marker(0x00), None);
        assert_eq!(EnvelopeVersion::from_marker(0xff), None);
    }

    #[test]
    fn header_lengths() {
        assert_eq!(EnvelopeVersion::Legacy.header_len(), 64);
        assert_eq!(EnvelopeVersion::V1.header_len(), 65);
    }

    #[test]
    fn current_version_is_v1() {
        assert_eq!(EnvelopeVersion::CURRENT, EnvelopeVersion::default());
        assert_eq!(EnvelopeVersion::CURRENT.kdf_iterations(), 100_000);
    }
}
