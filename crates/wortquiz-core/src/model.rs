//! Core data model types for wortquiz.
//!
//! These are the fundamental types the entire wortquiz system uses to
//! represent vocabulary entries, their grammatical attributes, and named
//! word lists. Serialized field names and the German label set match the
//! sheet exports and JSON files the tool has always consumed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::progression::Level;

/// A vocabulary entry with its learning progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// The word in the language being learned.
    pub original_word: String,
    /// Its translation.
    pub translation: String,
    /// Optional usage note or example sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category-dependent grammatical attributes.
    #[serde(flatten)]
    pub grammar: Grammar,
    /// Mastery level, 0 (new) through 7 (known).
    #[serde(default, rename = "progressionLevel")]
    pub level: Level,
    /// Owning list id; empty string means unassigned.
    #[serde(default)]
    pub list_id: String,
}

/// A word as it arrives from an import or manual entry, before the
/// repository assigns an id and progression defaults.
///
/// `level` is `None` unless the caller explicitly sets one; the repository
/// treats `None` as "keep whatever is stored" on update and as level 0 on
/// add. Exports reuse this type with `level` left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub original_word: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub grammar: Grammar,
    #[serde(
        default,
        rename = "progressionLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<Level>,
    #[serde(default)]
    pub list_id: String,
}

impl From<&Word> for WordDraft {
    fn from(word: &Word) -> Self {
        WordDraft {
            id: Some(word.id.clone()),
            original_word: word.original_word.clone(),
            translation: word.translation.clone(),
            description: word.description.clone(),
            grammar: word.grammar,
            level: None,
            list_id: word.list_id.clone(),
        }
    }
}

/// A named grouping of words.
///
/// Membership is computed by filtering words on `list_id`; the list itself
/// holds no member collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordList {
    pub id: String,
    pub name: String,
}

/// Grammatical attributes, tagged by word category.
///
/// The tag and the payload field names keep the original sheet spelling
/// (`wordType`, `article`, `preposition`, `kasus`, `reflexive`) so existing
/// data loads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "wordType")]
pub enum Grammar {
    #[serde(rename = "Nomen")]
    Noun {
        #[serde(default)]
        article: Article,
    },
    Verb {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        preposition: Option<Preposition>,
        #[serde(default)]
        kasus: Case,
        #[serde(default)]
        reflexive: bool,
    },
    #[serde(rename = "Adjektiv")]
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Other,
}

impl Grammar {
    /// The bare category, without payload.
    pub fn category(&self) -> Category {
        match self {
            Grammar::Noun { .. } => Category::Noun,
            Grammar::Verb { .. } => Category::Verb,
            Grammar::Adjective => Category::Adjective,
            Grammar::Adverb => Category::Adverb,
            Grammar::Pronoun => Category::Pronoun,
            Grammar::Preposition => Category::Preposition,
            Grammar::Conjunction => Category::Conjunction,
            Grammar::Interjection => Category::Interjection,
            Grammar::Other => Category::Other,
        }
    }

    /// Noun article, `None` for other categories.
    pub fn article(&self) -> Option<Article> {
        match self {
            Grammar::Noun { article } => Some(*article),
            _ => None,
        }
    }

    /// Governed preposition of a verb, if any.
    pub fn preposition(&self) -> Option<Preposition> {
        match self {
            Grammar::Verb { preposition, .. } => *preposition,
            _ => None,
        }
    }

    /// Grammatical case of a verb, `None` for other categories.
    pub fn case(&self) -> Option<Case> {
        match self {
            Grammar::Verb { kasus, .. } => Some(*kasus),
            _ => None,
        }
    }

    /// Whether this is a reflexive verb.
    pub fn reflexive(&self) -> bool {
        matches!(
            self,
            Grammar::Verb {
                reflexive: true,
                ..
            }
        )
    }

    /// Assembles the grammar for a category from its optional attributes.
    /// Attributes that do not apply to the category are dropped.
    pub fn for_category(
        category: Category,
        article: Article,
        preposition: Option<Preposition>,
        kasus: Case,
        reflexive: bool,
    ) -> Grammar {
        match category {
            Category::Noun => Grammar::Noun { article },
            Category::Verb => Grammar::Verb {
                preposition,
                kasus,
                reflexive,
            },
            Category::Adjective => Grammar::Adjective,
            Category::Adverb => Grammar::Adverb,
            Category::Pronoun => Grammar::Pronoun,
            Category::Preposition => Grammar::Preposition,
            Category::Conjunction => Grammar::Conjunction,
            Category::Interjection => Grammar::Interjection,
            Category::Other => Grammar::Other,
        }
    }
}

/// Word category, the bare tag of [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Noun => write!(f, "Nomen"),
            Category::Verb => write!(f, "Verb"),
            Category::Adjective => write!(f, "Adjektiv"),
            Category::Adverb => write!(f, "Adverb"),
            Category::Pronoun => write!(f, "Pronoun"),
            Category::Preposition => write!(f, "Preposition"),
            Category::Conjunction => write!(f, "Conjunction"),
            Category::Interjection => write!(f, "Interjection"),
            Category::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nomen" | "noun" => Ok(Category::Noun),
            "verb" => Ok(Category::Verb),
            "adjektiv" | "adjective" => Ok(Category::Adjective),
            "adverb" => Ok(Category::Adverb),
            "pronoun" | "pronomen" => Ok(Category::Pronoun),
            "preposition" | "präposition" => Ok(Category::Preposition),
            "conjunction" | "konjunktion" => Ok(Category::Conjunction),
            "interjection" | "interjektion" => Ok(Category::Interjection),
            "other" | "sonstiges" => Ok(Category::Other),
            other => Err(format!("unknown word type: {other}")),
        }
    }
}

/// Noun article kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Article {
    #[serde(rename = "Definit")]
    Definite,
    #[serde(rename = "Indefinit")]
    Indefinite,
    /// No article. Legacy sheets spell this `Ohne`.
    #[default]
    #[serde(alias = "Ohne")]
    None,
}

impl Article {
    /// Every article kind. Quiz article choices draw from this set.
    pub const ALL: [Article; 3] = [Article::Definite, Article::Indefinite, Article::None];
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Article::Definite => write!(f, "Definit"),
            Article::Indefinite => write!(f, "Indefinit"),
            Article::None => write!(f, "None"),
        }
    }
}

impl FromStr for Article {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "definit" | "definite" => Ok(Article::Definite),
            "indefinit" | "indefinite" => Ok(Article::Indefinite),
            "ohne" | "none" | "" => Ok(Article::None),
            other => Err(format!("unknown article: {other}")),
        }
    }
}

/// Grammatical case governed by a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Case {
    #[serde(rename = "Nominativ")]
    Nominative,
    #[serde(rename = "Akkusativ")]
    Accusative,
    #[serde(rename = "Dativ")]
    Dative,
    #[serde(rename = "Genitiv")]
    Genitive,
    #[default]
    None,
}

impl Case {
    /// Every case, in sheet order. Quiz case options draw from this set.
    pub const ALL: [Case; 5] = [
        Case::Nominative,
        Case::Accusative,
        Case::Dative,
        Case::Genitive,
        Case::None,
    ];
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Nominative => write!(f, "Nominativ"),
            Case::Accusative => write!(f, "Akkusativ"),
            Case::Dative => write!(f, "Dativ"),
            Case::Genitive => write!(f, "Genitiv"),
            Case::None => write!(f, "None"),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nominativ" | "nominative" => Ok(Case::Nominative),
            "akkusativ" | "accusative" => Ok(Case::Accusative),
            "dativ" | "dative" => Ok(Case::Dative),
            "genitiv" | "genitive" => Ok(Case::Genitive),
            "none" | "" => Ok(Case::None),
            other => Err(format!("unknown case: {other}")),
        }
    }
}

/// The closed set of governed prepositions verbs can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preposition {
    Mit,
    Nach,
    Auf,
    Von,
    In,
    An,
    #[serde(rename = "über")]
    Ueber,
    Unter,
    Vor,
    Hinter,
    Neben,
    Zwischen,
    Durch,
    #[serde(rename = "für")]
    Fuer,
    Gegen,
    Ohne,
    Um,
    Aus,
    Bei,
    #[serde(rename = "gegenüber")]
    Gegenueber,
    Seit,
    Zu,
    Entlang,
}

impl Preposition {
    /// Every member of the closed set. Quiz preposition options draw from
    /// this.
    pub const ALL: [Preposition; 23] = [
        Preposition::Mit,
        Preposition::Nach,
        Preposition::Auf,
        Preposition::Von,
        Preposition::In,
        Preposition::An,
        Preposition::Ueber,
        Preposition::Unter,
        Preposition::Vor,
        Preposition::Hinter,
        Preposition::Neben,
        Preposition::Zwischen,
        Preposition::Durch,
        Preposition::Fuer,
        Preposition::Gegen,
        Preposition::Ohne,
        Preposition::Um,
        Preposition::Aus,
        Preposition::Bei,
        Preposition::Gegenueber,
        Preposition::Seit,
        Preposition::Zu,
        Preposition::Entlang,
    ];
}

impl fmt::Display for Preposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Preposition::Mit => "mit",
            Preposition::Nach => "nach",
            Preposition::Auf => "auf",
            Preposition::Von => "von",
            Preposition::In => "in",
            Preposition::An => "an",
            Preposition::Ueber => "über",
            Preposition::Unter => "unter",
            Preposition::Vor => "vor",
            Preposition::Hinter => "hinter",
            Preposition::Neben => "neben",
            Preposition::Zwischen => "zwischen",
            Preposition::Durch => "durch",
            Preposition::Fuer => "für",
            Preposition::Gegen => "gegen",
            Preposition::Ohne => "ohne",
            Preposition::Um => "um",
            Preposition::Aus => "aus",
            Preposition::Bei => "bei",
            Preposition::Gegenueber => "gegenüber",
            Preposition::Seit => "seit",
            Preposition::Zu => "zu",
            Preposition::Entlang => "entlang",
        };
        write!(f, "{text}")
    }
}

impl FromStr for Preposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mit" => Ok(Preposition::Mit),
            "nach" => Ok(Preposition::Nach),
            "auf" => Ok(Preposition::Auf),
            "von" => Ok(Preposition::Von),
            "in" => Ok(Preposition::In),
            "an" => Ok(Preposition::An),
            "über" | "ueber" => Ok(Preposition::Ueber),
            "unter" => Ok(Preposition::Unter),
            "vor" => Ok(Preposition::Vor),
            "hinter" => Ok(Preposition::Hinter),
            "neben" => Ok(Preposition::Neben),
            "zwischen" => Ok(Preposition::Zwischen),
            "durch" => Ok(Preposition::Durch),
            "für" | "fuer" => Ok(Preposition::Fuer),
            "gegen" => Ok(Preposition::Gegen),
            "ohne" => Ok(Preposition::Ohne),
            "um" => Ok(Preposition::Um),
            "aus" => Ok(Preposition::Aus),
            "bei" => Ok(Preposition::Bei),
            "gegenüber" | "gegenueber" => Ok(Preposition::Gegenueber),
            "seit" => Ok(Preposition::Seit),
            "zu" => Ok(Preposition::Zu),
            "entlang" => Ok(Preposition::Entlang),
            other => Err(format!("unknown preposition: {other}")),
        }
    }
}
