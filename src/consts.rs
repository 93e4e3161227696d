// src/consts.rs
//! Shared constants: security parameters and envelope geometry

/// PBKDF2-HMAC-SHA256 iterations for every envelope version shipped so far
// tens of milliseconds per call; never lower it
pub const KDF_ITERATIONS: u32 = 100_000;

/// Derived AES-256 key length
pub const KEY_LEN: usize = 32;

/// Per-envelope random salt
pub const SALT_LEN: usize = 32;

/// AES-GCM nonce length used by this format (not the 12-byte default)
pub const IV_LEN: usize = 16;

/// AES-GCM authentication tag length
pub const TAG_LEN: usize = 16;

/// Version marker written as the first byte of current envelopes
pub const ENVELOPE_V1: u8 = 0x01;

/// salt ‖ iv ‖ tag: smallest possible legacy envelope
pub const LEGACY_HEADER_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

/// version ‖ salt ‖ iv ‖ tag: smallest possible v1 envelope
pub const V1_HEADER_LEN: usize = 1 + LEGACY_HEADER_LEN;

/// Minimum accepted master secret length, in characters
pub const MIN_MASTER_KEY_LEN: usize = 32;

/// Default size of a generated secure token, in bytes
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Random bytes appended to an API key prefix (192 bits)
pub const API_KEY_TOKEN_BYTES: usize = 24;

/// Default config file looked up when `SECRET_ENVELOPE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "secret-envelope.toml";

/// Prefix of the plaintext used by the startup self-test
pub const SELF_TEST_CANARY_PREFIX: &str = "encryption-self-test:";
