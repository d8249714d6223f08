//! Error types for the expiring cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its backing stores.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key or value rejected by the backing store
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// TTL that cannot produce a future expiry
    #[error("Invalid ttl: {0}")]
    InvalidTtl(String),

    /// Typed payload could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure raised by a foreign backing store
    #[error("Upstream store error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CacheError {
    /// Wraps an arbitrary backend error as an upstream failure.
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CacheError::Upstream(Box::new(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_upstream_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "backend down");
        let err = CacheError::upstream(io);

        assert!(err.to_string().contains("backend down"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_serialization_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: CacheError = json_err.into();
        assert!(matches!(err, CacheError::Serialization(_)));
    }
}
