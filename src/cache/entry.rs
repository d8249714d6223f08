//! Cache Entry Module
//!
//! Defines the wrapped entry format and the tagged representation handed to
//! the backing store.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// == Cache Entry ==
/// A cached value plus its optional absolute expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The stored value
    pub value: Value,
    /// Expiration instant, None = no expiration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// Creates an entry that expires at `expires_at`.
    pub fn expiring(value: Value, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: Some(expires_at),
        }
    }

    // == Freshness ==
    /// Checks whether the entry is still valid at `now`.
    ///
    /// Boundary condition: an entry is stale from the exact instant it expires,
    /// so freshness requires `now` strictly before `expires_at`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now < expires,
            None => true,
        }
    }

    /// Checks whether the entry has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_fresh_at(now)
    }

    // == Time To Live ==
    /// Returns the remaining lifetime at `now`.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a TTL and hasn't expired
    /// - `None` if the entry has no TTL (never expires)
    pub fn ttl_remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at
            .map(|expires| (expires - now).to_std().unwrap_or(Duration::ZERO))
    }

    /// Consumes the entry, yielding its payload.
    pub fn into_value(self) -> Value {
        self.value
    }
}

// == Stored Value ==
/// What the cache actually hands to a backing store.
///
/// The tag is written explicitly so a reader never has to guess whether a
/// stored value is a wrapped entry or something a foreign writer put there.
///
/// Decoding accepts untagged data too: anything that is not in the tagged
/// `{"kind", "data"}` form is read back as [`StoredValue::Raw`], so values
/// encoded before the tag existed still come back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StoredValue {
    /// Entry written by an expiring cache
    Wrapped(Entry),
    /// Value written by some other writer, returned to readers as-is
    Raw(Value),
}

impl StoredValue {
    /// Returns the wrapped entry, if any.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            StoredValue::Wrapped(entry) => Some(entry),
            StoredValue::Raw(_) => None,
        }
    }
}

/// Tagged wire form, mirrored from [`StoredValue`] for decoding.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
enum TaggedValue {
    Wrapped(Entry),
    Raw(Value),
}

/// Tagged form first; anything else is an untagged legacy value.
#[derive(Deserialize)]
#[serde(untagged)]
enum EncodedValue {
    Tagged(TaggedValue),
    Legacy(Value),
}

impl<'de> Deserialize<'de> for StoredValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match EncodedValue::deserialize(deserializer)? {
            EncodedValue::Tagged(TaggedValue::Wrapped(entry)) => StoredValue::Wrapped(entry),
            EncodedValue::Tagged(TaggedValue::Raw(value)) => StoredValue::Raw(value),
            EncodedValue::Legacy(value) => StoredValue::Raw(value),
        })
    }
}

impl From<Entry> for StoredValue {
    fn from(entry: Entry) -> Self {
        StoredValue::Wrapped(entry)
    }
}
