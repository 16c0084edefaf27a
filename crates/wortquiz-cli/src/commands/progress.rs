//! The `wortquiz progress` command and its subcommands.

use std::path::Path;

use anyhow::{bail, Result};

use crate::ProgressAction;

use super::{open_store, required_list_id};

pub fn execute(data_dir: &Path, action: ProgressAction) -> Result<()> {
    match action {
        ProgressAction::Reset { list } => reset(data_dir, list.as_deref()),
        ProgressAction::Known { word } => known(data_dir, &word),
    }
}

fn reset(data_dir: &Path, list: Option<&str>) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    let list_id = match list {
        Some(list) => Some(required_list_id(&store, list)?),
        None => None,
    };
    let affected = store.reset_progress(list_id.as_deref());
    store.flush(&mut backend)?;
    println!("Reset progression on {affected} words.");
    Ok(())
}

fn known(data_dir: &Path, word_id: &str) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    if !store.mark_known(word_id) {
        bail!("no word with id {word_id}");
    }
    store.flush(&mut backend)?;
    println!("Marked as known.");
    Ok(())
}
