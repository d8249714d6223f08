//! Backing Store Contract
//!
//! The four raw operations an expiring cache needs from whatever holds the data.

use crate::cache::StoredValue;
use crate::error::Result;

// == Raw Store ==
/// Opaque key-value storage wrapped by [`ExpiringCache`](super::ExpiringCache).
///
/// Implementations know nothing about expiry. They must hand back exactly the
/// [`StoredValue`] they were given, tag included. Backends with their own
/// error type wrap it with [`CacheError::upstream`](crate::CacheError::upstream).
pub trait RawStore {
    /// Read-time options, passed through uninterpreted
    type ReadOptions: Default;
    /// Write-time options, passed through uninterpreted
    type WriteOptions: Default;
    /// What a successful write reports, handed back to the cache's caller
    type WriteResult;

    fn raw_read(&mut self, key: &str, options: &Self::ReadOptions) -> Result<Option<StoredValue>>;

    fn raw_write(
        &mut self,
        key: &str,
        value: StoredValue,
        options: Self::WriteOptions,
    ) -> Result<Self::WriteResult>;

    /// Removes `key`, returning whether anything was there.
    fn raw_delete(&mut self, key: &str) -> Result<bool>;

    fn raw_exists(&mut self, key: &str) -> Result<bool>;
}

impl<S: RawStore + ?Sized> RawStore for Box<S> {
    type ReadOptions = S::ReadOptions;
    type WriteOptions = S::WriteOptions;
    type WriteResult = S::WriteResult;

    fn raw_read(&mut self, key: &str, options: &Self::ReadOptions) -> Result<Option<StoredValue>> {
        (**self).raw_read(key, options)
    }

    fn raw_write(
        &mut self,
        key: &str,
        value: StoredValue,
        options: Self::WriteOptions,
    ) -> Result<Self::WriteResult> {
        (**self).raw_write(key, value, options)
    }

    fn raw_delete(&mut self, key: &str) -> Result<bool> {
        (**self).raw_delete(key)
    }

    fn raw_exists(&mut self, key: &str) -> Result<bool> {
        (**self).raw_exists(key)
    }
}
