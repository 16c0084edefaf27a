//! The word repository.
//!
//! Owns the in-memory Word and WordList collections plus the explicit
//! load/flush cycle against a [`StorageBackend`]. Duplicate detection goes
//! through [`identity_key`] exclusively, and lists are independent
//! identity namespaces: the same word may exist once per list.

use std::str::FromStr;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::identity::identity_key;
use crate::model::{Grammar, Word, WordDraft, WordList};
use crate::progression::Level;
use crate::storage::{StorageBackend, LISTS_KEY, WORDS_KEY};

/// Conflict resolution strategy for batch imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStrategy {
    /// Update content of existing entries, keeping their progression.
    Merge,
    /// Leave existing entries untouched.
    AddOnly,
}

impl FromStr for ImportStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Ok(ImportStrategy::Merge),
            "add-only" | "add_only" | "addonly" => Ok(ImportStrategy::AddOnly),
            other => Err(format!("unknown import strategy: {other}")),
        }
    }
}

/// Outcome of a single add-or-update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
    Skipped,
}

/// Totals for a batch import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    /// Records dropped for missing required fields.
    pub rejected: usize,
}

/// The durable vocabulary collection.
#[derive(Debug, Default)]
pub struct WordStore {
    pub(crate) words: Vec<Word>,
    pub(crate) lists: Vec<WordList>,
}

impl WordStore {
    /// An empty store with the default list in place.
    pub fn new() -> Self {
        let mut store = Self::default();
        store.ensure_default_list();
        store
    }

    /// Loads both collections from the backend.
    ///
    /// Malformed or missing data degrades to an empty collection with a
    /// warning; callers always receive a usable store.
    pub fn load(backend: &dyn StorageBackend) -> Self {
        let mut store = Self {
            words: read_collection(backend, WORDS_KEY),
            lists: read_collection(backend, LISTS_KEY),
        };
        store.ensure_default_list();
        store
    }

    /// Writes both collections back to the backend.
    pub fn flush(&self, backend: &mut dyn StorageBackend) -> Result<()> {
        let words = serde_json::to_string(&self.words).context("failed to serialize words")?;
        backend.set(WORDS_KEY, &words)?;
        let lists =
            serde_json::to_string(&self.lists).context("failed to serialize word lists")?;
        backend.set(LISTS_KEY, &lists)?;
        Ok(())
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Words belonging to a list.
    pub fn words_in(&self, list_id: &str) -> Vec<&Word> {
        self.words.iter().filter(|w| w.list_id == list_id).collect()
    }

    /// Case-insensitive substring search over word and translation.
    pub fn search(&self, term: &str) -> Vec<&Word> {
        let needle = term.to_lowercase();
        self.words
            .iter()
            .filter(|w| {
                w.original_word.to_lowercase().contains(&needle)
                    || w.translation.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Adds a word. Returns false without mutating when a word with the
    /// same identity key already exists in the same list.
    pub fn add(&mut self, draft: WordDraft) -> bool {
        let key = identity_key(&draft.original_word, &draft.grammar);
        if self.position_by_key(&key, &draft.list_id).is_some() {
            return false;
        }
        self.words.push(materialize(draft));
        true
    }

    /// Replaces the record sharing the draft's identity key in the
    /// draft's list. The stored progression level is preserved unless the
    /// draft explicitly carries one; the stored id always survives.
    pub fn update(&mut self, draft: WordDraft) -> bool {
        let key = identity_key(&draft.original_word, &draft.grammar);
        let Some(pos) = self.position_by_key(&key, &draft.list_id) else {
            return false;
        };
        let existing = &self.words[pos];
        let level = draft.level.unwrap_or(existing.level);
        let id = existing.id.clone();
        self.words[pos] = Word {
            id,
            original_word: draft.original_word,
            translation: draft.translation,
            description: draft.description,
            grammar: draft.grammar,
            level,
            list_id: draft.list_id,
        };
        true
    }

    /// Adds the word, or resolves the identity conflict per `strategy`.
    pub fn add_or_update(&mut self, draft: WordDraft, strategy: ImportStrategy) -> UpsertOutcome {
        let key = identity_key(&draft.original_word, &draft.grammar);
        if self.position_by_key(&key, &draft.list_id).is_none() {
            self.words.push(materialize(draft));
            return UpsertOutcome::Added;
        }
        match strategy {
            ImportStrategy::Merge => {
                self.update(draft);
                UpsertOutcome::Updated
            }
            ImportStrategy::AddOnly => UpsertOutcome::Skipped,
        }
    }

    /// Runs a batch of drafts through [`WordStore::add_or_update`],
    /// targeting `list_id` for drafts that carry no list of their own.
    pub fn import_drafts(
        &mut self,
        drafts: Vec<WordDraft>,
        list_id: &str,
        strategy: ImportStrategy,
    ) -> ImportSummary {
        let mut summary = ImportSummary::default();
        for mut draft in drafts {
            if draft.list_id.is_empty() {
                draft.list_id = list_id.to_string();
            }
            match self.add_or_update(draft, strategy) {
                UpsertOutcome::Added => summary.added += 1,
                UpsertOutcome::Updated => summary.updated += 1,
                UpsertOutcome::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        self.words.len() != before
    }

    /// Deletes the word with this identity key from the given list.
    pub fn delete_by_identity(&mut self, key: &str, list_id: &str) -> bool {
        match self.position_by_key(key, list_id) {
            Some(pos) => {
                self.words.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Looks a word up by grammatical identity within a list.
    ///
    /// Three tiers, in order: verbs match on word plus preposition, nouns
    /// on word plus article, and anything left falls back to bare word
    /// equality. Category-specific disambiguation outranks text equality.
    pub fn find_by_identity(
        &self,
        original_word: &str,
        grammar: &Grammar,
        list_id: &str,
    ) -> Option<&Word> {
        if let Grammar::Verb { preposition, .. } = grammar {
            let hit = self.words.iter().find(|w| {
                w.list_id == list_id
                    && matches!(w.grammar, Grammar::Verb { .. })
                    && w.original_word == original_word
                    && w.grammar.preposition() == *preposition
            });
            if hit.is_some() {
                return hit;
            }
        }
        if let Grammar::Noun { article } = grammar {
            let hit = self.words.iter().find(|w| {
                w.list_id == list_id
                    && matches!(w.grammar, Grammar::Noun { .. })
                    && w.original_word == original_word
                    && w.grammar.article() == Some(*article)
            });
            if hit.is_some() {
                return hit;
            }
        }
        self.words
            .iter()
            .find(|w| w.list_id == list_id && w.original_word == original_word)
    }

    /// Serializes every word for content export.
    ///
    /// Progression level stays out of exports; they carry content, not
    /// mastery state.
    pub fn export_json(&self) -> Result<String> {
        let drafts: Vec<WordDraft> = self.words.iter().map(WordDraft::from).collect();
        serde_json::to_string_pretty(&drafts).context("failed to serialize export")
    }

    /// Restores the full word collection from a JSON array.
    ///
    /// Records missing optional fields load with defaults; records missing
    /// `originalWord`, `translation`, or `wordType` are skipped and
    /// counted, never aborting the batch. Words referencing lists that no
    /// longer exist land in the default list.
    pub fn import_json(&mut self, text: &str) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let values: Vec<serde_json::Value> = match serde_json::from_str(text) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("import is not a JSON array, keeping current words: {e}");
                return summary;
            }
        };

        self.ensure_default_list();
        let default_id = self
            .lists
            .first()
            .map(|l| l.id.clone())
            .unwrap_or_default();

        let mut imported = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<WordDraft>(value) {
                Ok(draft) => imported.push(materialize(draft)),
                Err(e) => {
                    tracing::warn!("skipping import record {index}: {e}");
                    summary.rejected += 1;
                }
            }
        }
        for word in &mut imported {
            if !word.list_id.is_empty() && self.list(&word.list_id).is_none() {
                word.list_id = default_id.clone();
            }
        }
        summary.added = imported.len();
        self.words = imported;
        summary
    }

    /// Sets matching words back to level 0. `None` resets everything.
    pub fn reset_progress(&mut self, list_id: Option<&str>) -> usize {
        let mut affected = 0;
        for word in &mut self.words {
            if list_id.map_or(true, |id| word.list_id == id) {
                word.level = Level::MIN;
                affected += 1;
            }
        }
        affected
    }

    /// Marks one word as known (level 7).
    pub fn mark_known(&mut self, id: &str) -> bool {
        match self.words.iter_mut().find(|w| w.id == id) {
            Some(word) => {
                word.level = Level::MAX;
                true
            }
            None => false,
        }
    }

    /// Drops every word. Lists survive.
    pub fn clear_words(&mut self) -> usize {
        let removed = self.words.len();
        self.words.clear();
        removed
    }

    fn position_by_key(&self, key: &str, list_id: &str) -> Option<usize> {
        self.words.iter().position(|w| {
            w.list_id == list_id && identity_key(&w.original_word, &w.grammar) == key
        })
    }
}

fn materialize(draft: WordDraft) -> Word {
    let id = match draft.id {
        Some(id) if !id.is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    };
    Word {
        id,
        original_word: draft.original_word,
        translation: draft.translation,
        description: draft.description,
        grammar: draft.grammar,
        level: draft.level.unwrap_or_default(),
        list_id: draft.list_id,
    }
}

fn read_collection<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Vec<T> {
    match backend.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("stored '{key}' collection is corrupt, starting empty: {e}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read '{key}': {e:#}");
            Vec::new()
        }
    }
}
