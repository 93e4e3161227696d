// src/config/defaults.rs
use crate::config::app::{Batch, Features, Keys, Tokens};
use crate::consts::DEFAULT_TOKEN_BYTES;

pub const DEFAULT_API_KEY_PREFIX: &str = "sk_";

/// No built-in master key: a missing key must stop startup
pub fn default_keys() -> Keys {
    Keys { master_key: None }
}

pub fn default_tokens() -> Tokens {
    Tokens {
        api_key_prefix: default_api_key_prefix(),
        token_bytes: default_token_bytes(),
    }
}

pub fn default_batch() -> Batch {
    Batch {
        worker_threads: default_worker_threads(),
    }
}

pub fn default_features() -> Features {
    Features {
        verify_on_startup: default_verify_on_startup(),
    }
}

pub fn default_api_key_prefix() -> String {
    DEFAULT_API_KEY_PREFIX.into()
}

pub fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}

pub fn default_worker_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn default_verify_on_startup() -> bool {
    true
}
