//! Write Options Module
//!
//! Per-write configuration and the result of a guarded write.

use std::time::Duration;

// == Write Options ==
/// Options for [`ExpiringCache::write`](super::ExpiringCache::write).
///
/// `O` carries store-specific options that the cache passes through to the
/// backing store without looking at them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions<O = ()> {
    /// Lifetime of the entry, None = never expires
    pub ttl: Option<Duration>,
    /// Skip the write when the key already exists
    pub only_if_absent: bool,
    /// Options forwarded to the backing store
    pub store: O,
}

impl WriteOptions<()> {
    /// Options with no TTL, no guard and unit store options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O> WriteOptions<O> {
    /// Sets the entry lifetime.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the entry lifetime in whole seconds.
    pub fn ttl_seconds(self, secs: u64) -> Self {
        self.ttl(Duration::from_secs(secs))
    }

    /// Enables the write-if-absent guard.
    pub fn only_if_absent(mut self) -> Self {
        self.only_if_absent = true;
        self
    }

    /// Replaces the store options, changing their type if needed.
    pub fn with_store<P>(self, store: P) -> WriteOptions<P> {
        WriteOptions {
            ttl: self.ttl,
            only_if_absent: self.only_if_absent,
            store,
        }
    }
}

// == Write Outcome ==
/// Result of a write at the cache layer.
///
/// `R` is whatever the backing store returned from its own write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome<R = ()> {
    /// The backing store accepted the entry
    Written(R),
    /// The key already existed and `only_if_absent` was set
    Skipped,
}

impl<R> WriteOutcome<R> {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }

    /// Returns the store's write result, or `None` if the write was skipped.
    pub fn into_written(self) -> Option<R> {
        match self {
            WriteOutcome::Written(result) => Some(result),
            WriteOutcome::Skipped => None,
        }
    }
}
