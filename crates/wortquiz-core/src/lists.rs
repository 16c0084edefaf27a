//! Word list management.
//!
//! Lists partition the vocabulary into independent namespaces. Every
//! store bootstraps a default list so imports always have a target.

use uuid::Uuid;

use crate::model::{Word, WordList};
use crate::repository::WordStore;

/// Name given to the list created on first start.
pub const DEFAULT_LIST_NAME: &str = "Meine erste Liste";

impl WordStore {
    pub fn lists(&self) -> &[WordList] {
        &self.lists
    }

    pub fn list(&self, id: &str) -> Option<&WordList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// The first list, which doubles as the default import target.
    pub fn default_list(&self) -> Option<&WordList> {
        self.lists.first()
    }

    /// Creates the default list when none exists yet.
    pub fn ensure_default_list(&mut self) {
        if self.lists.is_empty() {
            self.lists.push(WordList {
                id: Uuid::new_v4().to_string(),
                name: DEFAULT_LIST_NAME.to_string(),
            });
        }
    }

    /// Creates a list with a fresh id and returns it.
    pub fn create_list(&mut self, name: &str) -> WordList {
        let list = WordList {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.lists.push(list.clone());
        list
    }

    /// Renames a list in place. The id never changes.
    pub fn rename_list(&mut self, id: &str, new_name: &str) -> bool {
        match self.lists.iter_mut().find(|l| l.id == id) {
            Some(list) => {
                list.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Deletes a list together with every word assigned to it.
    ///
    /// Returns the number of cascaded words, or `None` when no list with
    /// this id exists.
    pub fn delete_list(&mut self, id: &str) -> Option<usize> {
        let pos = self.lists.iter().position(|l| l.id == id)?;
        self.lists.remove(pos);
        let before = self.words.len();
        self.words.retain(|w| w.list_id != id);
        Some(before - self.words.len())
    }

    /// Moves a word into another list.
    ///
    /// The target must be an existing list or the empty string, which
    /// leaves the word unassigned.
    pub fn move_word(&mut self, word_id: &str, target_list_id: &str) -> bool {
        if !target_list_id.is_empty() && self.list(target_list_id).is_none() {
            return false;
        }
        match self.words.iter_mut().find(|w| w.id == word_id) {
            Some(word) => {
                word.list_id = target_list_id.to_string();
                true
            }
            None => false,
        }
    }

    /// Resolves a list by id or, failing that, by exact name.
    pub fn resolve_list(&self, id_or_name: &str) -> Option<&WordList> {
        self.list(id_or_name)
            .or_else(|| self.lists.iter().find(|l| l.name == id_or_name))
    }

    /// Words not assigned to any list.
    pub fn unassigned_words(&self) -> Vec<&Word> {
        self.words.iter().filter(|w| w.list_id.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Grammar, WordDraft};

    fn draft(word: &str, list: &str) -> WordDraft {
        WordDraft {
            id: None,
            original_word: word.into(),
            translation: word.to_lowercase(),
            description: None,
            grammar: Grammar::Noun {
                article: Article::Definite,
            },
            level: None,
            list_id: list.into(),
        }
    }

    #[test]
    fn new_store_carries_the_default_list() {
        let store = WordStore::new();
        assert_eq!(store.lists().len(), 1);
        assert_eq!(store.lists()[0].name, DEFAULT_LIST_NAME);
        assert!(!store.lists()[0].id.is_empty());
    }

    #[test]
    fn create_and_rename() {
        let mut store = WordStore::new();
        let list = store.create_list("Verben");
        assert_eq!(store.lists().len(), 2);

        assert!(store.rename_list(&list.id, "Starke Verben"));
        assert_eq!(store.list(&list.id).unwrap().name, "Starke Verben");
        assert_eq!(store.list(&list.id).unwrap().id, list.id);
        assert!(!store.rename_list("missing", "x"));
    }

    #[test]
    fn delete_cascades_to_words() {
        let mut store = WordStore::new();
        let keep = store.create_list("keep");
        let drop = store.create_list("drop");
        store.add(draft("Haus", &keep.id));
        store.add(draft("Baum", &drop.id));
        store.add(draft("See", &drop.id));

        assert_eq!(store.delete_list(&drop.id), Some(2));
        assert_eq!(store.words().len(), 1);
        assert!(store.list(&drop.id).is_none());
        assert_eq!(store.delete_list(&drop.id), None);

        let noun = Grammar::Noun {
            article: Article::Definite,
        };
        assert!(store.find_by_identity("Baum", &noun, &drop.id).is_none());
    }

    #[test]
    fn move_word_validates_the_target() {
        let mut store = WordStore::new();
        let list = store.create_list("Ziel");
        store.add(draft("Haus", ""));
        let id = store.words()[0].id.clone();

        assert!(!store.move_word(&id, "nonexistent"));
        assert_eq!(store.words()[0].list_id, "");

        assert!(store.move_word(&id, &list.id));
        assert_eq!(store.words()[0].list_id, list.id);

        assert!(store.move_word(&id, ""));
        assert!(store.unassigned_words().len() == 1);

        assert!(!store.move_word("missing", &list.id));
    }

    #[test]
    fn resolve_by_id_or_name() {
        let mut store = WordStore::new();
        let list = store.create_list("Verben");
        assert_eq!(store.resolve_list(&list.id).unwrap().name, "Verben");
        assert_eq!(store.resolve_list("Verben").unwrap().id, list.id);
        assert!(store.resolve_list("unknown").is_none());
    }
}
