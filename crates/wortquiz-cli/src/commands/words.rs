//! The `wortquiz words` command.

use std::path::Path;

use anyhow::Result;

use wortquiz_core::model::{Article, Case, Grammar, Word};
use wortquiz_core::repository::WordStore;

use super::{open_store, resolve_list_id};

pub fn execute(data_dir: &Path, list: Option<String>, search: Option<String>) -> Result<()> {
    let (_backend, store) = open_store(data_dir)?;
    let list_id = resolve_list_id(&store, list.as_deref())?;

    let words: Vec<&Word> = match (&list_id, &search) {
        (Some(id), None) => store.words_in(id),
        (None, Some(term)) => store.search(term),
        (Some(id), Some(term)) => store
            .search(term)
            .into_iter()
            .filter(|w| &w.list_id == id)
            .collect(),
        (None, None) => store.words().iter().collect(),
    };

    if words.is_empty() {
        println!("No words found. Run `wortquiz sync` or `wortquiz import` to load some.");
        return Ok(());
    }

    print_words(&words, &store);
    println!("\n{} words.", words.len());

    Ok(())
}

fn print_words(words: &[&Word], store: &WordStore) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Word",
        "Translation",
        "Type",
        "Details",
        "Level",
        "List",
    ]);
    for word in words {
        let list_name = store
            .list(&word.list_id)
            .map(|l| l.name.as_str())
            .unwrap_or("-");
        table.add_row(vec![
            Cell::new(&word.original_word),
            Cell::new(&word.translation),
            Cell::new(word.grammar.category()),
            Cell::new(grammar_details(&word.grammar)),
            Cell::new(word.level),
            Cell::new(list_name),
        ]);
    }

    println!("{table}");
}

/// One display cell with the grammar payload: the article for nouns,
/// `sich`, the preposition, and the bracketed case for verbs.
fn grammar_details(grammar: &Grammar) -> String {
    match grammar {
        Grammar::Noun {
            article: Article::None,
        } => String::new(),
        Grammar::Noun { article } => article.to_string(),
        Grammar::Verb {
            preposition,
            kasus,
            reflexive,
        } => {
            let mut parts = Vec::new();
            if *reflexive {
                parts.push("sich".to_string());
            }
            if let Some(preposition) = preposition {
                parts.push(preposition.to_string());
            }
            if *kasus != Case::None {
                parts.push(format!("({kasus})"));
            }
            parts.join(" ")
        }
        _ => String::new(),
    }
}
