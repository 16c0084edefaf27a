//! Remote vocabulary sources for wortquiz.
//!
//! Fetches published CSV sheets and the version watermark over HTTP,
//! carries the TOML configuration naming those sources, and drives the
//! add-only sync cycle that keeps a local store current without ever
//! touching recorded progress.

pub mod client;
pub mod config;
pub mod error;
pub mod sync;

pub use client::RemoteClient;
pub use config::{load_config, load_config_from, Config, Source};
pub use error::FetchError;
pub use sync::{check_for_update, sync, SourceReport, SyncOutcome, UpdateCheck};
