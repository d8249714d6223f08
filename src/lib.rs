//! Expiring Cache - per-entry TTL over an opaque key-value store
//!
//! Wraps any store implementing [`RawStore`] with optional expiry metadata
//! and an "only if absent" write guard. Expiry is lazy: stale entries are
//! purged when a read discovers them.
//!
//! Not thread-safe. Callers that share a cache across threads must serialize
//! every operation behind their own lock.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    CacheStats, Clock, Entry, ExpiringCache, ManualClock, MemoryStore, RawStore, StoredValue,
    SystemClock, WriteOptions, WriteOutcome,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
