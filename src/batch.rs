// src/batch.rs
//! Bounded worker pool for bulk envelope work
//!
//! Key derivation is slow, so bulk jobs (re-keying a table, decrypting an
//! export) run here instead of on a request thread.
//! Results come back in input order, one per item; a bad item never stops
//! the rest.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::Config;
use crate::crypto::{decrypt_with_key, encrypt_with_key, rotate_key};
use crate::error::Result;
use crate::key_ops::MasterKey;

pub struct CryptoPool {
    pool: ThreadPool,
}

impl CryptoPool {
    /// Pool with exactly `threads` workers
    pub fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("secret-envelope-{i}"))
            .build()?;
        tracing::debug!(threads = pool.current_num_threads(), "crypto pool started");
        Ok(Self { pool })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.batch.worker_threads)
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn encrypt_all<S>(&self, plaintexts: &[S], key: &MasterKey) -> Vec<Result<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        self.pool.install(|| {
            plaintexts
                .par_iter()
                .map(|p| encrypt_with_key(p.as_ref(), key))
                .collect()
        })
    }

    pub fn decrypt_all<S>(&self, envelopes: &[S], key: &MasterKey) -> Vec<Result<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        self.pool.install(|| {
            envelopes
                .par_iter()
                .map(|e| decrypt_with_key(e.as_ref(), key))
                .collect()
        })
    }

    /// Rotate every envelope from `old` to `new`.
    ///
    /// Persist only the items that came back `Ok`; failed ones must keep
    /// their stored value.
    pub fn rotate_all<S>(
        &self,
        envelopes: &[S],
        old: &MasterKey,
        new: &MasterKey,
    ) -> Vec<Result<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<_> = self.pool.install(|| {
            envelopes
                .par_iter()
                .map(|e| rotate_key(e.as_ref(), old, new))
                .collect()
        });
        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(total = results.len(), failed, "batch rotation finished");
        results
    }
}

impl std::fmt::Debug for CryptoPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoPool")
            .field("threads", &self.threads())
            .finish()
    }
}
