//! The quiz session engine.
//!
//! A session is a state machine over a fixed selection of words: idle
//! until [`QuizEngine::start`], in progress while questions are answered
//! or skipped, finished once [`QuizEngine::finish`] stamps the end time
//! and commits progression back through the repository. Sessions are
//! ephemeral and never persisted; abandoning one is simply not finishing.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::QuizError;
use crate::model::{Article, Case, Grammar, Preposition, Word, WordDraft};
use crate::progression::Level;
use crate::repository::{ImportStrategy, WordStore};

/// Minimum eligible pool size; below this a start is declined.
pub const MIN_POOL: usize = 4;

/// Options offered per question, for the primary choice and the verb
/// sub-choices alike.
pub const OPTION_COUNT: usize = 4;

/// Session length when the caller does not ask for one.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Which side of the card is prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// German prompt, translated options.
    Forward,
    /// Translated prompt, German options.
    Reverse,
}

impl Direction {
    fn for_level(level: Level) -> Self {
        if level.is_reverse() {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// One question of a running session: a word snapshot plus everything
/// needed to render and judge it.
#[derive(Debug, Clone)]
pub struct QuizWord {
    pub word: Word,
    pub direction: Direction,
    /// Primary options, exactly one of which is the expected answer.
    pub options: Vec<String>,
    /// Preposition choices. Populated for verb reverse questions only.
    pub preposition_options: Vec<Preposition>,
    /// Case choices. Populated for verb reverse questions only.
    pub case_options: Vec<Case>,
    pub selected: Option<String>,
    pub selected_article: Option<Article>,
    pub selected_preposition: Option<Preposition>,
    pub selected_kasus: Option<Case>,
    pub verdict: Option<bool>,
    /// Composed display of the full correct answer, populated only after
    /// an incorrect verdict.
    pub correct_display: Option<String>,
    pub skipped: bool,
}

impl QuizWord {
    /// The text shown as the question prompt.
    pub fn prompt(&self) -> &str {
        match self.direction {
            Direction::Forward => &self.word.original_word,
            Direction::Reverse => &self.word.translation,
        }
    }

    /// The option text that counts as the right primary answer.
    pub fn expected(&self) -> &str {
        match self.direction {
            Direction::Forward => &self.word.translation,
            Direction::Reverse => &self.word.original_word,
        }
    }

    /// Whether this question has been answered or skipped.
    pub fn is_resolved(&self) -> bool {
        self.verdict.is_some() || self.skipped
    }

    /// Noun reverse questions also elicit an article choice.
    pub fn wants_article(&self) -> bool {
        self.direction == Direction::Reverse && matches!(self.word.grammar, Grammar::Noun { .. })
    }

    /// Verb reverse questions also elicit preposition and case choices.
    pub fn wants_verb_details(&self) -> bool {
        !self.preposition_options.is_empty()
    }
}

/// A caller's selections for the pending question.
#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub primary: String,
    pub article: Option<Article>,
    pub preposition: Option<Preposition>,
    pub kasus: Option<Case>,
}

impl Answer {
    /// An answer carrying only the primary selection.
    pub fn primary(text: impl Into<String>) -> Self {
        Answer {
            primary: text.into(),
            ..Answer::default()
        }
    }
}

/// Verdict for one answered question.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Full correct answer display, present when the verdict is incorrect.
    pub correct_display: Option<String>,
}

/// A running quiz. Never persisted.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub words: Vec<QuizWord>,
    pub current: usize,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True once every question has been answered or skipped.
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(QuizWord::is_resolved)
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub skipped: usize,
    /// Correct share over all session words, 0 to 100, two decimals.
    pub percentage: f64,
    pub elapsed_secs: f64,
    pub finished_at: DateTime<Utc>,
    pub correct: Vec<QuizWord>,
    pub incorrect: Vec<QuizWord>,
}

/// Drives quiz sessions over a word pool and commits progression changes
/// back through the repository.
#[derive(Debug)]
pub struct QuizEngine {
    rng: StdRng,
    session: Option<QuizSession>,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            session: None,
        }
    }

    /// An engine with a fixed seed, for reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// The question under the cursor, or `None` when idle or past the end.
    pub fn current(&self) -> Option<&QuizWord> {
        let session = self.session.as_ref()?;
        session.words.get(session.current)
    }

    /// Starts a session over `pool`, quizzing at most `count` words.
    ///
    /// Verbs without a case assignment are filtered out before selection.
    /// With fewer than [`MIN_POOL`] eligible words the start is declined
    /// and the engine stays idle.
    pub fn start(&mut self, pool: &[Word], count: usize) -> Result<&QuizSession, QuizError> {
        let eligible: Vec<&Word> = pool.iter().filter(|w| is_eligible(w)).collect();
        if eligible.len() < MIN_POOL {
            return Err(QuizError::NotEnoughWords {
                eligible: eligible.len(),
            });
        }

        let mut selected = eligible.clone();
        selected.shuffle(&mut self.rng);
        selected.truncate(count.min(selected.len()));

        let mut words = Vec::with_capacity(selected.len());
        for word in selected {
            words.push(build_question(word, &eligible, &mut self.rng));
        }

        let session = QuizSession {
            words,
            current: 0,
            started_at: Utc::now(),
            ended_at: None,
        };
        tracing::info!("quiz session started with {} questions", session.words.len());
        Ok(self.session.insert(session))
    }

    /// Records the verdict for the pending question. Does not advance.
    pub fn answer(&mut self, answer: Answer) -> Result<AnswerOutcome, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoSession)?;
        let index = session.current;
        let quiz_word = session
            .words
            .get_mut(index)
            .ok_or(QuizError::NoPendingQuestion)?;
        if quiz_word.is_resolved() {
            return Err(QuizError::AlreadyAnswered);
        }

        quiz_word.selected = Some(answer.primary);
        quiz_word.selected_article = answer.article;
        quiz_word.selected_preposition = answer.preposition;
        quiz_word.selected_kasus = answer.kasus;

        let correct = judge(quiz_word);
        quiz_word.verdict = Some(correct);
        if !correct {
            quiz_word.correct_display = Some(correct_display(&quiz_word.word));
        }
        Ok(AnswerOutcome {
            correct,
            correct_display: quiz_word.correct_display.clone(),
        })
    }

    /// Moves to the next question. Returns the question now under the
    /// cursor, or `None` once the session has run out.
    pub fn advance(&mut self) -> Result<Option<&QuizWord>, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoSession)?;
        if session.current < session.words.len() {
            session.current += 1;
        }
        Ok(session.words.get(session.current))
    }

    /// Steps back one question for review. Resolved questions cannot be
    /// answered again.
    pub fn previous(&mut self) -> Result<Option<&QuizWord>, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoSession)?;
        if session.current == 0 {
            return Ok(None);
        }
        session.current -= 1;
        Ok(session.words.get(session.current))
    }

    /// Marks the pending word as already known: level straight to the
    /// maximum, committed immediately, excluded from scoring. Advances.
    pub fn skip(&mut self, store: &mut WordStore) -> Result<(), QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoSession)?;
        let index = session.current;
        let quiz_word = session
            .words
            .get_mut(index)
            .ok_or(QuizError::NoPendingQuestion)?;
        if quiz_word.is_resolved() {
            return Err(QuizError::AlreadyAnswered);
        }

        quiz_word.skipped = true;
        quiz_word.word.level = Level::MAX;
        if !store.mark_known(&quiz_word.word.id) {
            tracing::warn!(
                "skipped word '{}' is not in the store",
                quiz_word.word.original_word
            );
        }
        session.current += 1;
        Ok(())
    }

    /// Ends the session: stamps the end time, commits one level step per
    /// answered word, and reduces everything to [`QuizResults`].
    pub fn finish(&mut self, store: &mut WordStore) -> Result<QuizResults, QuizError> {
        let mut session = self.session.take().ok_or(QuizError::NoSession)?;
        let finished_at = Utc::now();
        session.ended_at = Some(finished_at);

        for quiz_word in &mut session.words {
            if let Some(correct) = quiz_word.verdict {
                let next = quiz_word.word.level.scored(correct);
                quiz_word.word.level = next;
                let mut draft = WordDraft::from(&quiz_word.word);
                draft.level = Some(next);
                store.add_or_update(draft, ImportStrategy::Merge);
            }
        }

        let total = session.words.len();
        let elapsed_secs = (finished_at - session.started_at).num_milliseconds() as f64 / 1000.0;

        let mut correct = Vec::new();
        let mut incorrect = Vec::new();
        let mut skipped = 0;
        for quiz_word in session.words {
            match quiz_word.verdict {
                Some(true) => correct.push(quiz_word),
                Some(false) => incorrect.push(quiz_word),
                None if quiz_word.skipped => skipped += 1,
                None => {}
            }
        }

        let score = correct.len();
        let percentage = round2(score as f64 / total as f64 * 100.0);
        tracing::info!("quiz session finished: {score}/{total} ({percentage}%)");

        Ok(QuizResults {
            score,
            total,
            skipped,
            percentage,
            elapsed_secs,
            finished_at,
            correct,
            incorrect,
        })
    }

    /// Drops the session without committing anything.
    pub fn abandon(&mut self) {
        self.session = None;
    }
}

fn is_eligible(word: &Word) -> bool {
    !matches!(
        word.grammar,
        Grammar::Verb {
            kasus: Case::None,
            ..
        }
    )
}

fn build_question(word: &Word, eligible: &[&Word], rng: &mut StdRng) -> QuizWord {
    let direction = Direction::for_level(word.level);
    let correct = match direction {
        Direction::Forward => word.translation.clone(),
        Direction::Reverse => word.original_word.clone(),
    };

    let mut distractors: Vec<String> = eligible
        .iter()
        .filter(|other| other.id != word.id)
        .map(|other| match direction {
            Direction::Forward => other.translation.clone(),
            Direction::Reverse => other.original_word.clone(),
        })
        .filter(|text| *text != correct)
        .collect();
    distractors.sort();
    distractors.dedup();
    distractors.shuffle(rng);

    let mut options: Vec<String> = distractors.into_iter().take(OPTION_COUNT - 1).collect();
    options.push(correct);
    options.shuffle(rng);

    let (preposition_options, case_options) = match (direction, &word.grammar) {
        (
            Direction::Reverse,
            Grammar::Verb {
                preposition, kasus, ..
            },
        ) => (
            sub_options(&Preposition::ALL, *preposition, rng),
            sub_options(&Case::ALL, Some(*kasus), rng),
        ),
        _ => (Vec::new(), Vec::new()),
    };

    QuizWord {
        word: word.clone(),
        direction,
        options,
        preposition_options,
        case_options,
        selected: None,
        selected_article: None,
        selected_preposition: None,
        selected_kasus: None,
        verdict: None,
        correct_display: None,
        skipped: false,
    }
}

/// Up to four unique members of a closed set, always containing the
/// expected one when there is one.
fn sub_options<T: Copy + PartialEq>(all: &[T], expected: Option<T>, rng: &mut StdRng) -> Vec<T> {
    let mut rest: Vec<T> = all.iter().copied().filter(|m| Some(*m) != expected).collect();
    rest.shuffle(rng);
    let mut options: Vec<T> = expected.into_iter().collect();
    let room = OPTION_COUNT - options.len();
    options.extend(rest.into_iter().take(room));
    options.shuffle(rng);
    options
}

fn judge(quiz_word: &QuizWord) -> bool {
    let primary_ok = quiz_word.selected.as_deref() == Some(quiz_word.expected());
    if quiz_word.direction == Direction::Forward {
        return primary_ok;
    }
    match quiz_word.word.grammar {
        Grammar::Noun { article } => {
            primary_ok && (article == Article::None || quiz_word.selected_article == Some(article))
        }
        Grammar::Verb { preposition, .. } => {
            // The case choice is shown and recorded but never decides
            // the verdict.
            let preposition_ok = match preposition {
                Some(expected) => quiz_word.selected_preposition == Some(expected),
                None => true,
            };
            primary_ok && preposition_ok
        }
        _ => primary_ok,
    }
}

/// Composes the full correct answer shown after a wrong answer: article
/// and preposition prefixed, case suffixed, `sich` in front of
/// reflexive verbs.
fn correct_display(word: &Word) -> String {
    let mut text = word.original_word.clone();
    match word.grammar {
        Grammar::Noun { article } => {
            if article != Article::None {
                text = format!("{article} {text}");
            }
        }
        Grammar::Verb {
            preposition,
            kasus,
            reflexive,
        } => {
            if let Some(preposition) = preposition {
                text = format!("{preposition} {text}");
            }
            if kasus != Case::None {
                text = format!("{text} ({kasus})");
            }
            if reflexive {
                text = format!("sich {text}");
            }
        }
        _ => {}
    }
    text
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
