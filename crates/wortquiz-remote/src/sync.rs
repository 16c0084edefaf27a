//! Source synchronization.
//!
//! Compares the stored vocabulary version against the published
//! watermark and, when behind, re-imports every configured source. All
//! sync imports run add-only so recorded progress is never overwritten.
//! Remote failures degrade to the local state and are logged, never
//! fatal.

use anyhow::Result;

use wortquiz_core::parser::parse_csv;
use wortquiz_core::repository::{ImportStrategy, ImportSummary, WordStore};
use wortquiz_core::storage::{local_version, set_local_version, StorageBackend};

use crate::client::RemoteClient;
use crate::config::Config;

/// Result of a staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCheck {
    UpToDate { local: u32 },
    Behind { local: u32, remote: u32 },
}

/// What happened to one configured source during a sync.
#[derive(Debug)]
pub struct SourceReport {
    pub name: String,
    /// `None` when the fetch failed and the source was skipped.
    pub summary: Option<ImportSummary>,
    /// Rows the CSV parser dropped.
    pub rows_skipped: usize,
}

/// What one sync run did.
#[derive(Debug)]
pub struct SyncOutcome {
    pub check: UpdateCheck,
    pub reports: Vec<SourceReport>,
    /// The watermark stored this run, when it advanced.
    pub stored_version: Option<u32>,
}

impl SyncOutcome {
    /// Words newly added across all sources.
    pub fn imported_words(&self) -> usize {
        self.reports
            .iter()
            .filter_map(|r| r.summary.as_ref())
            .map(|s| s.added)
            .sum()
    }
}

/// Compares the stored watermark with the published one.
///
/// An unreachable or broken version endpoint degrades to "up to date".
pub async fn check_for_update(
    client: &RemoteClient,
    config: &Config,
    backend: &dyn StorageBackend,
) -> UpdateCheck {
    let local = local_version(backend);
    match client.fetch_version(&config.version_url).await {
        Ok(remote) if local < remote => UpdateCheck::Behind { local, remote },
        Ok(_) => UpdateCheck::UpToDate { local },
        Err(e) => {
            if e.is_unavailable() {
                tracing::warn!("version endpoint unreachable, staying on local data: {e}");
            } else {
                tracing::warn!("version endpoint sent a broken document: {e}");
            }
            UpdateCheck::UpToDate { local }
        }
    }
}

/// The full sync cycle: check, import every source when behind, then
/// advance the watermark.
///
/// The watermark only moves when at least one source imported, so a run
/// where every fetch failed is retried by the next sync. The caller is
/// responsible for flushing the store afterwards.
pub async fn sync(
    client: &RemoteClient,
    config: &Config,
    store: &mut WordStore,
    backend: &mut dyn StorageBackend,
) -> Result<SyncOutcome> {
    let check = check_for_update(client, config, backend).await;
    let UpdateCheck::Behind { local, remote } = check else {
        return Ok(SyncOutcome {
            check,
            reports: Vec::new(),
            stored_version: None,
        });
    };
    tracing::info!("vocabulary update available: {local} -> {remote}");

    let default_list = store
        .default_list()
        .map(|l| l.id.clone())
        .unwrap_or_default();

    let mut reports = Vec::new();
    for source in &config.sources {
        match client.fetch_csv(&source.url).await {
            Ok(text) => {
                let parsed = parse_csv(&text);
                if !parsed.skipped.is_empty() {
                    tracing::warn!(
                        "source '{}': {} rows skipped",
                        source.name,
                        parsed.skipped.len()
                    );
                }
                let summary =
                    store.import_drafts(parsed.drafts, &default_list, ImportStrategy::AddOnly);
                tracing::info!(
                    "source '{}': {} added, {} already known",
                    source.name,
                    summary.added,
                    summary.skipped
                );
                reports.push(SourceReport {
                    name: source.name.clone(),
                    summary: Some(summary),
                    rows_skipped: parsed.skipped.len(),
                });
            }
            Err(e) => {
                tracing::warn!("source '{}' failed: {e}", source.name);
                reports.push(SourceReport {
                    name: source.name.clone(),
                    summary: None,
                    rows_skipped: 0,
                });
            }
        }
    }

    let stored_version = if reports.iter().any(|r| r.summary.is_some()) {
        set_local_version(backend, remote)?;
        Some(remote)
    } else {
        tracing::warn!("every source failed, keeping version {local} for a retry");
        None
    };

    Ok(SyncOutcome {
        check,
        reports,
        stored_version,
    })
}
