//! The `wortquiz import` command.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use wortquiz_core::parser::parse_csv;
use wortquiz_core::repository::ImportStrategy;

use super::{open_store, required_list_id};

pub fn execute(
    data_dir: &Path,
    file: PathBuf,
    strategy: String,
    list: Option<String>,
) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let (mut backend, mut store) = open_store(data_dir)?;

    let is_json = file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let summary = store.import_json(&text);
        store.flush(&mut backend)?;
        println!(
            "Restored {} words ({} records rejected).",
            summary.added, summary.rejected
        );
        return Ok(());
    }

    let strategy: ImportStrategy = strategy.parse().map_err(|e: String| anyhow!(e))?;
    let target = match list.as_deref() {
        Some(list) => required_list_id(&store, list)?,
        None => store.default_list().map(|l| l.id.clone()).unwrap_or_default(),
    };

    let parsed = parse_csv(&text);
    if !parsed.unknown_columns.is_empty() {
        println!(
            "Ignoring unknown columns: {}",
            parsed.unknown_columns.join(", ")
        );
    }

    let summary = store.import_drafts(parsed.drafts, &target, strategy);
    store.flush(&mut backend)?;

    println!(
        "Imported {} words ({} updated, {} skipped, {} rows dropped).",
        summary.added,
        summary.updated,
        summary.skipped,
        parsed.skipped.len()
    );
    for skip in parsed.skipped.iter().take(5) {
        println!("  line {}: {}", skip.line, skip.reason);
    }
    if parsed.skipped.len() > 5 {
        println!("  ... and {} more", parsed.skipped.len() - 5);
    }

    Ok(())
}
