// src/aliases.rs
//! Secret wrapper types built on secure-gate
//!
//! Everything here zeroizes on drop and never prints its contents.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // per-envelope AES-256 key, output of PBKDF2

// Dynamic secrets
dynamic_alias!(MasterSecret, String); // process-wide master secret

// Random secrets
random_alias!(RandomSalt32, 32); // per-envelope PBKDF2 salt
random_alias!(RandomIv16, 16); // per-envelope AES-GCM IV
random_alias!(RandomMasterSecret32, 32); // freshly generated master secret
random_alias!(RandomApiToken24, 24); // API key body
