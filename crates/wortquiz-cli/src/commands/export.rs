//! The `wortquiz export` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::open_store;

pub fn execute(data_dir: &Path, output: Option<PathBuf>) -> Result<()> {
    let (_backend, store) = open_store(data_dir)?;
    let json = store.export_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {} words to {}", store.words().len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
