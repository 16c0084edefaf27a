//! Word identity resolution.
//!
//! Re-importing a source must not duplicate words, while entries that share
//! a spelling but differ grammatically must coexist. The identity key is
//! the single place that rule lives; repository and engine code never
//! derive ad-hoc keys.

use crate::model::{Article, Grammar};

/// Computes the identity key for a word.
///
/// The key is the lower-cased word, extended by the category-specific
/// fields that distinguish otherwise identical spellings: verbs append
/// their reflexive flag and governed preposition, nouns prepend their
/// article. Absent fields contribute an empty string.
///
/// Pure and deterministic; two words with equal keys are the same entry
/// for merge purposes.
pub fn identity_key(original_word: &str, grammar: &Grammar) -> String {
    let word = original_word.to_lowercase();
    match grammar {
        Grammar::Verb {
            preposition,
            reflexive,
            ..
        } => {
            let prep = preposition.map(|p| p.to_string()).unwrap_or_default();
            format!("{word}{reflexive}{prep}")
        }
        Grammar::Noun { article } => {
            let prefix = match article {
                Article::None => String::new(),
                other => other.to_string().to_lowercase(),
            };
            format!("{prefix}{word}")
        }
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Case, Preposition};

    #[test]
    fn bare_categories_use_lowercased_word() {
        assert_eq!(identity_key("Schnell", &Grammar::Adjective), "schnell");
        assert_eq!(identity_key("oft", &Grammar::Adverb), "oft");
    }

    #[test]
    fn noun_key_prepends_article() {
        let definite = Grammar::Noun {
            article: Article::Definite,
        };
        let indefinite = Grammar::Noun {
            article: Article::Indefinite,
        };
        let bare = Grammar::Noun {
            article: Article::None,
        };
        assert_eq!(identity_key("See", &definite), "definitsee");
        assert_eq!(identity_key("See", &indefinite), "indefinitsee");
        assert_eq!(identity_key("See", &bare), "see");
        assert_ne!(identity_key("See", &definite), identity_key("See", &indefinite));
    }

    #[test]
    fn verb_key_carries_reflexive_and_preposition() {
        let plain = Grammar::Verb {
            preposition: None,
            kasus: Case::Accusative,
            reflexive: false,
        };
        let with_prep = Grammar::Verb {
            preposition: Some(Preposition::Nach),
            kasus: Case::Dative,
            reflexive: false,
        };
        let reflexive = Grammar::Verb {
            preposition: None,
            kasus: Case::Accusative,
            reflexive: true,
        };
        assert_eq!(identity_key("gehen", &plain), "gehenfalse");
        assert_eq!(identity_key("gehen", &with_prep), "gehenfalsenach");
        assert_eq!(identity_key("freuen", &reflexive), "freuentrue");
    }

    #[test]
    fn verb_case_does_not_affect_key() {
        let dative = Grammar::Verb {
            preposition: Some(Preposition::Mit),
            kasus: Case::Dative,
            reflexive: false,
        };
        let accusative = Grammar::Verb {
            preposition: Some(Preposition::Mit),
            kasus: Case::Accusative,
            reflexive: false,
        };
        assert_eq!(
            identity_key("rechnen", &dative),
            identity_key("rechnen", &accusative)
        );
    }

    #[test]
    fn verb_and_noun_with_same_spelling_differ() {
        let noun = Grammar::Noun {
            article: Article::Definite,
        };
        let verb = Grammar::Verb {
            preposition: None,
            kasus: Case::Accusative,
            reflexive: false,
        };
        assert_ne!(identity_key("Essen", &noun), identity_key("essen", &verb));
    }

    #[test]
    fn deterministic() {
        let grammar = Grammar::Verb {
            preposition: Some(Preposition::Auf),
            kasus: Case::Accusative,
            reflexive: true,
        };
        assert_eq!(
            identity_key("warten", &grammar),
            identity_key("warten", &grammar)
        );
    }
}
