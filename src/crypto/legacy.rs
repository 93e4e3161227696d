// src/crypto/legacy.rs
//! One-time migration of unversioned envelopes to the current layout

use super::decrypt::open_envelope;
use super::encrypt::seal_envelope;
use super::envelope::Envelope;
use crate::enums::EnvelopeVersion;
use crate::error::Result;
use crate::key_ops::MasterKey;

/// Whether an encoded envelope predates the version marker
///
/// Layout detection only: a legacy envelope whose salt begins with a marker
/// byte reports `false` here but still decrypts through the fallback path.
pub fn needs_upgrade(envelope: &str) -> bool {
    super::envelope::envelope_version(envelope) == Some(EnvelopeVersion::Legacy)
}

/// Re-encrypt an envelope in the current layout under the same key.
///
/// Envelopes already in the current layout are authenticated and returned
/// unchanged. Legacy envelopes, including ones misdetected as v1, are
/// decrypted and sealed again with a fresh salt and IV.
pub fn upgrade_legacy(envelope: &str, key: &MasterKey) -> Result<String> {
    let parsed = Envelope::decode(envelope)?;

    if parsed.version == EnvelopeVersion::CURRENT {
        match open_envelope(&parsed, key) {
            Ok(_) => return Ok(envelope.trim().to_owned()),
            Err(err) => {
                let Some(legacy) = parsed.legacy_fallback() else {
                    return Err(err);
                };
                return reseal(&legacy, key);
            }
        }
    }

    reseal(&parsed, key)
}

fn reseal(legacy: &Envelope, key: &MasterKey) -> Result<String> {
    let plaintext = open_envelope(legacy, key)?;
    let upgraded = seal_envelope(&plaintext, key)?;
    tracing::info!(from = %legacy.version, to = %upgraded.version, "envelope upgraded");
    Ok(upgraded.encode())
}
