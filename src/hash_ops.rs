// src/hash_ops.rs
//! One-way hashing for generated tokens
//!
//! Unsalted SHA-256 is only safe for high-entropy input. Use it for values
//! produced by [`crate::token_ops`], never for passwords or anything else a
//! human picked.

use sha2::{Digest, Sha256};

/// SHA-256 of `value` as 64 lowercase hex characters.
///
/// Deterministic, so it supports exact-match lookup of a stored token
/// without keeping the token itself. Callers must only pass high-entropy
/// generated values.
pub fn hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Recompute the hash of `value` and compare it with a stored hex digest.
///
/// The comparison runs over the decoded digests, so the stored hex may use
/// either case. Malformed stored digests never match.
pub fn verify_hash(value: &str, expected_hex: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hex.trim()) else {
        return false;
    };
    let actual = Sha256::digest(value.as_bytes());
    if expected.len() != actual.len() {
        return false;
    }
    // Fold over every byte; no early exit on the first mismatch
    expected
        .iter()
        .zip(actual.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
