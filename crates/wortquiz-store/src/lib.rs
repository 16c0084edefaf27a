//! Storage backends for the wortquiz vocabulary store.
//!
//! [`FileBackend`] keeps each persisted collection in its own JSON file
//! under a data directory. The in-memory backend used throughout the
//! test suites is defined next to the storage trait in the core crate
//! and re-exported here.

pub mod file;

pub use file::FileBackend;
pub use wortquiz_core::storage::MemoryBackend;
