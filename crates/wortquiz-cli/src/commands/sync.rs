//! The `wortquiz sync` command.

use std::path::Path;

use anyhow::Result;

use wortquiz_remote::{check_for_update, load_config_from, sync, RemoteClient, UpdateCheck};

use super::open_store;

pub async fn execute(data_dir: &Path, check_only: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config_from(config_path)?;
    let (mut backend, mut store) = open_store(data_dir)?;
    let client = RemoteClient::new();

    if check_only {
        match check_for_update(&client, &config, &backend).await {
            UpdateCheck::Behind { local, remote } => {
                println!("Update available: local version {local}, published {remote}.");
            }
            UpdateCheck::UpToDate { local } => println!("Up to date (version {local})."),
        }
        return Ok(());
    }

    let outcome = sync(&client, &config, &mut store, &mut backend).await?;
    match outcome.check {
        UpdateCheck::UpToDate { local } => {
            println!("Up to date (version {local}).");
        }
        UpdateCheck::Behind { remote, .. } => {
            store.flush(&mut backend)?;
            for report in &outcome.reports {
                match &report.summary {
                    Some(summary) => println!(
                        "{}: {} added, {} updated, {} already present",
                        report.name, summary.added, summary.updated, summary.skipped
                    ),
                    None => println!("{}: fetch failed, skipped", report.name),
                }
            }
            match outcome.stored_version {
                Some(version) => println!(
                    "Now at version {version}, {} new words.",
                    outcome.imported_words()
                ),
                None => println!(
                    "Every source failed; keeping the old vocabulary (published version {remote})."
                ),
            }
        }
    }

    Ok(())
}
