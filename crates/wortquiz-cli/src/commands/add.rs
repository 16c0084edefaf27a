//! The `wortquiz add` command.

use std::path::Path;

use anyhow::{anyhow, Result};

use wortquiz_core::model::{Article, Case, Category, Grammar, WordDraft};

use super::{open_store, required_list_id};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    data_dir: &Path,
    word: String,
    translation: String,
    word_type: String,
    article: Option<String>,
    preposition: Option<String>,
    kasus: Option<String>,
    reflexive: bool,
    description: Option<String>,
    list: Option<String>,
) -> Result<()> {
    let category: Category = word_type.parse().map_err(|e: String| anyhow!(e))?;
    if category != Category::Noun {
        anyhow::ensure!(article.is_none(), "--article only applies to nouns");
    }
    if category != Category::Verb {
        anyhow::ensure!(
            preposition.is_none() && kasus.is_none() && !reflexive,
            "--preposition, --kasus, and --reflexive only apply to verbs"
        );
    }

    let article = match article.as_deref() {
        Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
        None => Article::None,
    };
    let preposition = match preposition.as_deref() {
        Some(raw) => Some(raw.parse().map_err(|e: String| anyhow!(e))?),
        None => None,
    };
    let kasus: Case = match kasus.as_deref() {
        Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
        None => Case::None,
    };
    let grammar = Grammar::for_category(category, article, preposition, kasus, reflexive);

    let (mut backend, mut store) = open_store(data_dir)?;
    let list_id = match list.as_deref() {
        Some(list) => required_list_id(&store, list)?,
        None => store.default_list().map(|l| l.id.clone()).unwrap_or_default(),
    };

    let draft = WordDraft {
        id: None,
        original_word: word.clone(),
        translation,
        description,
        grammar,
        level: None,
        list_id,
    };
    if store.add(draft) {
        store.flush(&mut backend)?;
        println!("Added '{word}'.");
        if category == Category::Verb && kasus == Case::None {
            println!("Note: verbs without a kasus are skipped by drills.");
        }
    } else {
        println!("'{word}' is already in this list, nothing added.");
    }

    Ok(())
}
