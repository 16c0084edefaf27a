//! Storage abstraction for persisted collections.
//!
//! Everything durable lives in a key-value store mapping string keys to
//! JSON blobs. The on-disk implementation lives in `wortquiz-store`; the
//! in-memory one here backs tests and ephemeral runs.

use std::collections::HashMap;

use anyhow::Result;

/// Key holding the full Word collection.
pub const WORDS_KEY: &str = "words";
/// Key holding the full WordList collection.
pub const LISTS_KEY: &str = "wordLists";
/// Key holding aggregate learning statistics.
pub const STATS_KEY: &str = "wordLearnStats";
/// Key holding the remote-content version watermark.
pub const VERSION_KEY: &str = "vocabulary_version";

/// A key-value store of JSON blobs.
///
/// The core reads and writes whole entries; it never seeks inside a blob.
pub trait StorageBackend {
    /// Reads the blob at `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Writes the blob at `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes the entry at `key` if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads the locally stored vocabulary version watermark.
///
/// Missing or unreadable values degrade to 0, which always counts as
/// stale against a real remote version.
pub fn local_version(backend: &dyn StorageBackend) -> u32 {
    match backend.get(VERSION_KEY) {
        Ok(Some(raw)) => match raw.trim().parse() {
            Ok(version) => version,
            Err(_) => {
                tracing::warn!("stored vocabulary version is not a number: {raw}");
                0
            }
        },
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!("failed to read vocabulary version: {e:#}");
            0
        }
    }
}

/// Stores the vocabulary version watermark.
pub fn set_local_version(backend: &mut dyn StorageBackend, version: u32) -> Result<()> {
    backend.set(VERSION_KEY, &version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("words").unwrap(), None);

        backend.set("words", "[]").unwrap();
        assert_eq!(backend.get("words").unwrap().as_deref(), Some("[]"));

        backend.set("words", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(
            backend.get("words").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );

        backend.remove("words").unwrap();
        assert_eq!(backend.get("words").unwrap(), None);
    }

    #[test]
    fn version_watermark_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(local_version(&backend), 0);

        set_local_version(&mut backend, 12).unwrap();
        assert_eq!(local_version(&backend), 12);
    }

    #[test]
    fn garbage_version_degrades_to_zero() {
        let mut backend = MemoryBackend::new();
        backend.set(VERSION_KEY, "not-a-number").unwrap();
        assert_eq!(local_version(&backend), 0);
    }
}
