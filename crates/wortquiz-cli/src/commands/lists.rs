//! The `wortquiz lists` command and its subcommands.

use std::path::Path;

use anyhow::{bail, Result};

use crate::ListsAction;

use super::{open_store, required_list_id};

pub fn execute(data_dir: &Path, action: Option<ListsAction>) -> Result<()> {
    match action {
        None => show(data_dir),
        Some(ListsAction::Create { name }) => create(data_dir, &name),
        Some(ListsAction::Rename { list, name }) => rename(data_dir, &list, &name),
        Some(ListsAction::Delete { list }) => delete(data_dir, &list),
        Some(ListsAction::Move { word, list }) => move_word(data_dir, &word, list.as_deref()),
    }
}

fn show(data_dir: &Path) -> Result<()> {
    use comfy_table::{Cell, Table};

    let (_backend, store) = open_store(data_dir)?;

    let mut table = Table::new();
    table.set_header(vec!["Name", "Words", "Id"]);
    for list in store.lists() {
        table.add_row(vec![
            Cell::new(&list.name),
            Cell::new(store.words_in(&list.id).len()),
            Cell::new(&list.id),
        ]);
    }
    println!("{table}");

    let unassigned = store.unassigned_words().len();
    if unassigned > 0 {
        println!("\n{unassigned} words belong to no list.");
    }

    Ok(())
}

fn create(data_dir: &Path, name: &str) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    let list = store.create_list(name);
    store.flush(&mut backend)?;
    println!("Created list '{}' ({}).", list.name, list.id);
    Ok(())
}

fn rename(data_dir: &Path, list: &str, name: &str) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    let id = required_list_id(&store, list)?;
    store.rename_list(&id, name);
    store.flush(&mut backend)?;
    println!("Renamed list to '{name}'.");
    Ok(())
}

fn delete(data_dir: &Path, list: &str) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    let id = required_list_id(&store, list)?;
    let name = store
        .list(&id)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| id.clone());
    let removed = store.delete_list(&id).unwrap_or(0);
    store.flush(&mut backend)?;
    println!("Deleted list '{name}' and {removed} member words.");
    Ok(())
}

fn move_word(data_dir: &Path, word_id: &str, list: Option<&str>) -> Result<()> {
    let (mut backend, mut store) = open_store(data_dir)?;
    let target = match list {
        Some(list) => required_list_id(&store, list)?,
        None => String::new(),
    };
    if !store.move_word(word_id, &target) {
        bail!("no word with id {word_id}");
    }
    store.flush(&mut backend)?;
    match list {
        Some(list) => println!("Moved word into '{list}'."),
        None => println!("Removed the word from its list."),
    }
    Ok(())
}
