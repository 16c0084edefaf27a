//! Command implementations, one module per subcommand.

pub mod add;
pub mod drill;
pub mod export;
pub mod import;
pub mod init;
pub mod lists;
pub mod progress;
pub mod stats;
pub mod sync;
pub mod words;

use std::path::Path;

use anyhow::{anyhow, Result};

use wortquiz_core::repository::WordStore;
use wortquiz_store::FileBackend;

/// Opens the data directory and loads the word store from it.
pub(crate) fn open_store(data_dir: &Path) -> Result<(FileBackend, WordStore)> {
    let backend = FileBackend::open(data_dir)?;
    let store = WordStore::load(&backend);
    Ok((backend, store))
}

/// Resolves a list given by name or id, erroring when it does not exist.
pub(crate) fn required_list_id(store: &WordStore, list: &str) -> Result<String> {
    store
        .resolve_list(list)
        .map(|l| l.id.clone())
        .ok_or_else(|| anyhow!("no list named or identified by '{list}'"))
}

/// Like [`required_list_id`] but passes `None` through.
pub(crate) fn resolve_list_id(store: &WordStore, list: Option<&str>) -> Result<Option<String>> {
    match list {
        Some(list) => required_list_id(store, list).map(Some),
        None => Ok(None),
    }
}

/// Formats a second count as `1h 2m 3s`, dropping leading zero units.
pub(crate) fn format_duration(secs: f64) -> String {
    let total = secs.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
