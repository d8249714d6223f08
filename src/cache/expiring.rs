//! Expiring Cache Module
//!
//! Decorator that adds per-entry TTL and a write-if-absent guard on top of
//! any [`RawStore`]. Expiry is checked lazily: nothing runs in the background,
//! and a stale entry is deleted by the read that finds it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::{
    CacheStats, Clock, Entry, RawStore, StoredValue, SystemClock, WriteOptions, WriteOutcome,
};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Expiring Cache ==
/// Expiry-aware view over a backing store.
///
/// Each call maps to a single store operation, plus one delete when a read
/// lands on a stale entry. Not thread-safe.
#[derive(Debug)]
pub struct ExpiringCache<S, C = SystemClock> {
    /// Backing store
    store: S,
    /// Time source for stamping and checking expiry
    clock: C,
    /// TTL for writes that carry none
    default_ttl: Option<Duration>,
    /// Read/write counters
    stats: CacheStats,
}

impl<S: RawStore> ExpiringCache<S, SystemClock> {
    // == Constructors ==
    /// Wraps `store`, reading time from the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }

    /// Wraps `store` using the default TTL from `config`.
    pub fn from_config(store: S, config: &CacheConfig) -> Self {
        Self::new(store).with_default_ttl(config.default_ttl)
    }
}

impl<S: RawStore, C: Clock> ExpiringCache<S, C> {
    /// Wraps `store`, reading time from `clock`.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            default_ttl: None,
            stats: CacheStats::new(),
        }
    }

    /// Sets the TTL used when a write does not specify one.
    pub fn with_default_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.default_ttl = ttl;
        self
    }

    // == Write ==
    /// Stores `value` under `key`.
    ///
    /// With a TTL the entry expires `ttl` after now; without one it never
    /// expires. When `only_if_absent` is set and the store already holds the
    /// key, nothing is written and [`WriteOutcome::Skipped`] is returned;
    /// otherwise the store's own write result comes back in
    /// [`WriteOutcome::Written`].
    ///
    /// The guard tests existence only. An entry that is stale but not yet
    /// purged still blocks the write.
    ///
    /// # Errors
    /// - [`CacheError::InvalidTtl`] for a zero or unrepresentable TTL, before the store is touched
    /// - Any store error, unchanged
    pub fn write(
        &mut self,
        key: &str,
        value: Value,
        options: WriteOptions<S::WriteOptions>,
    ) -> Result<WriteOutcome<S::WriteResult>> {
        let WriteOptions {
            ttl,
            only_if_absent,
            store: store_options,
        } = options;

        let expires_at = match ttl.or(self.default_ttl) {
            Some(ttl) => Some(self.expiry_after(ttl)?),
            None => None,
        };

        if only_if_absent && self.store.raw_exists(key)? {
            debug!(key, "write skipped, key already present");
            self.stats.record_skipped_write();
            return Ok(WriteOutcome::Skipped);
        }

        let entry = Entry { value, expires_at };
        let result = self
            .store
            .raw_write(key, StoredValue::Wrapped(entry), store_options)?;
        self.stats.record_write();

        Ok(WriteOutcome::Written(result))
    }

    // == Read ==
    /// Reads the value under `key`, or `None` if missing or expired.
    ///
    /// A stale entry is deleted from the store before `None` is returned.
    /// Values not written by an expiring cache come back unchanged.
    /// `options` go to the store as-is.
    pub fn read(&mut self, key: &str, options: &S::ReadOptions) -> Result<Option<Value>> {
        let stored = match self.store.raw_read(key, options)? {
            Some(stored) => stored,
            None => {
                trace!(key, "cache miss");
                self.stats.record_miss();
                return Ok(None);
            }
        };

        let entry = match stored {
            StoredValue::Wrapped(entry) => entry,
            StoredValue::Raw(value) => {
                trace!(key, "cache hit, unwrapped value");
                self.stats.record_hit();
                return Ok(Some(value));
            }
        };

        if entry.is_fresh_at(self.clock.now()) {
            trace!(key, "cache hit");
            self.stats.record_hit();
            return Ok(Some(entry.into_value()));
        }

        // Whether anything was actually removed does not matter here.
        self.store.raw_delete(key)?;
        debug!(key, "purged stale entry");
        self.stats.record_expired();

        Ok(None)
    }

    // == Shorthands ==
    /// [`read`](Self::read) with default store options.
    pub fn get(&mut self, key: &str) -> Result<Option<Value>> {
        self.read(key, &S::ReadOptions::default())
    }

    /// Unconditional [`write`](Self::write) with default store options.
    pub fn set(
        &mut self,
        key: &str,
        value: Value,
        ttl: Option<Duration>,
    ) -> Result<WriteOutcome<S::WriteResult>> {
        let options = WriteOptions {
            ttl,
            only_if_absent: false,
            store: S::WriteOptions::default(),
        };
        self.write(key, value, options)
    }

    // == Typed Access ==
    /// Serializes `value` to JSON and writes it.
    pub fn write_as<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
        options: WriteOptions<S::WriteOptions>,
    ) -> Result<WriteOutcome<S::WriteResult>> {
        let value = serde_json::to_value(value)?;
        self.write(key, value, options)
    }

    /// Reads a value and deserializes it into `T`.
    pub fn read_as<T: DeserializeOwned>(
        &mut self,
        key: &str,
        options: &S::ReadOptions,
    ) -> Result<Option<T>> {
        match self.read(key, options)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    // == Fetch ==
    /// Returns the cached value, or computes, stores and returns a new one.
    pub fn fetch<F>(
        &mut self,
        key: &str,
        options: WriteOptions<S::WriteOptions>,
        compute: F,
    ) -> Result<Value>
    where
        F: FnOnce() -> Value,
    {
        if let Some(value) = self.get(key)? {
            return Ok(value);
        }

        let value = compute();
        self.write(key, value.clone(), options)?;
        Ok(value)
    }

    // == Passthroughs ==
    /// Deletes `key` from the store, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        self.store.raw_delete(key)
    }

    /// Checks whether the store holds `key`, without checking expiry.
    pub fn exists(&mut self, key: &str) -> Result<bool> {
        self.store.raw_exists(key)
    }

    /// Remaining lifetime of the entry under `key`.
    ///
    /// `None` when the key is missing, holds a raw value, or never expires.
    /// Stale entries report zero and are left in place.
    pub fn ttl_remaining(&mut self, key: &str) -> Result<Option<Duration>> {
        let stored = self.store.raw_read(key, &S::ReadOptions::default())?;
        let now = self.clock.now();

        Ok(stored
            .as_ref()
            .and_then(StoredValue::as_entry)
            .and_then(|entry| entry.ttl_remaining_at(now)))
    }

    // == Accessors ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct access to the backing store, bypassing expiry handling.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    /// Unwraps the cache, returning the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    // == Helpers ==
    fn expiry_after(&self, ttl: Duration) -> Result<DateTime<Utc>> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl("ttl must be positive".to_string()));
        }

        chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|delta| self.clock.now().checked_add_signed(delta))
            .ok_or_else(|| CacheError::InvalidTtl(format!("ttl of {:?} is out of range", ttl)))
    }
}
