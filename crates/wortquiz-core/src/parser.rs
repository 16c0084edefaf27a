//! CSV vocabulary parsing.
//!
//! The import format is a plain comma-separated table with a header row:
//!
//! ```text
//! originalWord,translation,description,wordType,article,preposition,kasus,reflexive
//! warten,to wait,,Verb,,auf,Akkusativ,false
//! See,lake,,Nomen,Definit,,,
//! ```
//!
//! Parsing is forgiving: a broken row is skipped and reported, never
//! aborting the batch. Cells are split on bare commas, so values
//! themselves must not contain commas.

use crate::model::{Category, Grammar, WordDraft};

/// Result of a CSV parse: the usable drafts plus everything that was
/// dropped or looked odd on the way.
#[derive(Debug, Default)]
pub struct CsvImport {
    pub drafts: Vec<WordDraft>,
    pub skipped: Vec<RowSkip>,
    /// Header names that match no known column.
    pub unknown_columns: Vec<String>,
}

/// One dropped row and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    /// 1-based line number; the header is line 1.
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
struct Columns {
    original_word: Option<usize>,
    translation: Option<usize>,
    description: Option<usize>,
    word_type: Option<usize>,
    article: Option<usize>,
    preposition: Option<usize>,
    kasus: Option<usize>,
    reflexive: Option<usize>,
}

impl Columns {
    fn from_header(line: &str) -> (Self, Vec<String>) {
        let mut columns = Columns::default();
        let mut unknown = Vec::new();
        for (index, name) in line.split(',').map(str::trim).enumerate() {
            match name {
                "originalWord" => columns.original_word = Some(index),
                "translation" => columns.translation = Some(index),
                "description" => columns.description = Some(index),
                "wordType" => columns.word_type = Some(index),
                "article" => columns.article = Some(index),
                "preposition" => columns.preposition = Some(index),
                "kasus" => columns.kasus = Some(index),
                "reflexive" => columns.reflexive = Some(index),
                "" => {}
                other => {
                    tracing::warn!("ignoring unknown CSV column '{other}'");
                    unknown.push(other.to_string());
                }
            }
        }
        (columns, unknown)
    }
}

/// Parses CSV text into word drafts.
///
/// Rows missing `originalWord`, `translation`, or a recognizable
/// `wordType` are skipped. Unparseable articles and cases fall back to
/// their defaults, an unparseable preposition becomes none, and
/// `reflexive` is true only for a case-insensitive `true`.
pub fn parse_csv(text: &str) -> CsvImport {
    let mut import = CsvImport::default();
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return import;
    };
    let (columns, unknown_columns) = Columns::from_header(header_line);
    import.unknown_columns = unknown_columns;
    let width = header_line.split(',').count();

    for (number, line) in lines.enumerate() {
        // The header is line 1, so data starts at line 2.
        let line_no = number + 2;
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != width {
            import.skip(
                line_no,
                format!("expected {width} columns, found {}", cells.len()),
            );
            continue;
        }

        let Some(original_word) = field(&cells, columns.original_word) else {
            import.skip(line_no, "missing original word".to_string());
            continue;
        };
        let Some(translation) = field(&cells, columns.translation) else {
            import.skip(line_no, "missing translation".to_string());
            continue;
        };
        let category = match field(&cells, columns.word_type) {
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) => category,
                Err(_) => {
                    import.skip(line_no, format!("unknown word type '{raw}'"));
                    continue;
                }
            },
            None => {
                import.skip(line_no, "missing word type".to_string());
                continue;
            }
        };

        let grammar = Grammar::for_category(
            category,
            field(&cells, columns.article)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            field(&cells, columns.preposition).and_then(|raw| raw.parse().ok()),
            field(&cells, columns.kasus)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            field(&cells, columns.reflexive)
                .map(|raw| raw.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        );

        import.drafts.push(WordDraft {
            id: None,
            original_word: original_word.to_string(),
            translation: translation.to_string(),
            description: field(&cells, columns.description).map(str::to_string),
            grammar,
            level: None,
            list_id: String::new(),
        });
    }
    import
}

impl CsvImport {
    fn skip(&mut self, line: usize, reason: String) {
        tracing::warn!("line {line}: {reason}");
        self.skipped.push(RowSkip { line, reason });
    }
}

fn field<'a>(cells: &[&'a str], index: Option<usize>) -> Option<&'a str> {
    index
        .and_then(|i| cells.get(i))
        .copied()
        .filter(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Case, Preposition};

    const HEADER: &str =
        "originalWord,translation,description,wordType,article,preposition,kasus,reflexive";

    #[test]
    fn parses_a_full_verb_row() {
        let text = format!("{HEADER}\nfreuen,to look forward,with auf,Verb,,auf,Akkusativ,TRUE\n");
        let import = parse_csv(&text);
        assert!(import.skipped.is_empty());
        assert_eq!(import.drafts.len(), 1);

        let draft = &import.drafts[0];
        assert_eq!(draft.original_word, "freuen");
        assert_eq!(draft.translation, "to look forward");
        assert_eq!(draft.description.as_deref(), Some("with auf"));
        assert_eq!(
            draft.grammar,
            Grammar::Verb {
                preposition: Some(Preposition::Auf),
                kasus: Case::Accusative,
                reflexive: true,
            }
        );
        assert!(draft.list_id.is_empty());
        assert!(draft.level.is_none());
    }

    #[test]
    fn parses_nouns_with_and_without_article() {
        let text = format!("{HEADER}\nSee,lake,,Nomen,Definit,,,\nGeld,money,,Nomen,,,,\n");
        let import = parse_csv(&text);
        assert_eq!(import.drafts.len(), 2);
        assert_eq!(
            import.drafts[0].grammar,
            Grammar::Noun {
                article: Article::Definite
            }
        );
        assert_eq!(
            import.drafts[1].grammar,
            Grammar::Noun {
                article: Article::None
            }
        );
    }

    #[test]
    fn umlaut_prepositions_parse() {
        let text = format!("{HEADER}\nsprechen,to talk,,Verb,,über,Akkusativ,false\n");
        let import = parse_csv(&text);
        assert_eq!(
            import.drafts[0].grammar.preposition(),
            Some(Preposition::Ueber)
        );
    }

    #[test]
    fn skips_rows_with_wrong_column_count() {
        let text = format!("{HEADER}\nHaus,house,,Nomen,Definit\n");
        let import = parse_csv(&text);
        assert!(import.drafts.is_empty());
        assert_eq!(import.skipped.len(), 1);
        assert_eq!(import.skipped[0].line, 2);
        assert!(import.skipped[0].reason.contains("columns"));
    }

    #[test]
    fn skips_rows_missing_required_fields() {
        let text = format!("{HEADER}\n,house,,Nomen,Definit,,,\nHaus,,,Nomen,Definit,,,\n");
        let import = parse_csv(&text);
        assert!(import.drafts.is_empty());
        assert_eq!(import.skipped.len(), 2);
        assert_eq!(import.skipped[0].reason, "missing original word");
        assert_eq!(import.skipped[1].reason, "missing translation");
        assert_eq!(import.skipped[1].line, 3);
    }

    #[test]
    fn skips_unknown_word_types() {
        let text = format!("{HEADER}\nHaus,house,,Artikel,,,,\n");
        let import = parse_csv(&text);
        assert!(import.drafts.is_empty());
        assert_eq!(import.skipped[0].reason, "unknown word type 'Artikel'");
    }

    #[test]
    fn bad_article_and_case_fall_back_to_defaults() {
        let text = format!(
            "{HEADER}\nSee,lake,,Nomen,Plural,,,\ndenken,to think,,Verb,,an,Vokativ,nope\n"
        );
        let import = parse_csv(&text);
        assert!(import.skipped.is_empty());
        assert_eq!(
            import.drafts[0].grammar,
            Grammar::Noun {
                article: Article::None
            }
        );
        assert_eq!(
            import.drafts[1].grammar,
            Grammar::Verb {
                preposition: Some(Preposition::An),
                kasus: Case::None,
                reflexive: false,
            }
        );
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let text = format!("{HEADER}\r\nHaus,house,,Nomen,Definit,,,\r\n\r\n");
        let import = parse_csv(&text);
        assert_eq!(import.drafts.len(), 1);
        assert!(import.skipped.is_empty());
    }

    #[test]
    fn unknown_columns_are_reported_and_ignored() {
        let text = "originalWord,translation,wordType,plural\nHaus,house,Nomen,Häuser\n";
        let import = parse_csv(text);
        assert_eq!(import.drafts.len(), 1);
        assert_eq!(import.drafts[0].original_word, "Haus");
        assert_eq!(import.unknown_columns, ["plural"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let import = parse_csv("");
        assert!(import.drafts.is_empty());
        assert!(import.skipped.is_empty());
        assert!(import.unknown_columns.is_empty());
    }
}
