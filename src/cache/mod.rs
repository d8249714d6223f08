//! Cache Module
//!
//! Provides the expiring cache decorator and the store contract it wraps.

mod backend;
mod clock;
mod entry;
mod expiring;
mod memory;
mod options;
mod stats;


// Re-export public types
pub use backend::RawStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{Entry, StoredValue};
pub use expiring::ExpiringCache;
pub use memory::MemoryStore;
pub use options::{WriteOptions, WriteOutcome};
pub use stats::CacheStats;

// == Public Constants ==
/// Default maximum key length in bytes accepted by [`MemoryStore`]
pub const MAX_KEY_LENGTH: usize = 256;

/// Default maximum encoded value size in bytes accepted by [`MemoryStore`]
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
