//! Learning statistics.
//!
//! Aggregates finished quiz sessions into one durable summary: overall
//! totals, a rolling session history, and per-word difficulty tallies.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::QuizResults;
use crate::storage::{StorageBackend, STATS_KEY};

/// Sessions kept in the rolling history; the oldest entry drops first.
pub const HISTORY_CAP: usize = 20;

/// Length of the most-difficult-words report.
pub const MOST_DIFFICULT_CAP: usize = 5;

/// Correct/incorrect counts for one word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTally {
    /// Display text, denormalized so reports need no store lookup.
    pub word: String,
    pub correct: u32,
    pub incorrect: u32,
}

impl WordTally {
    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Share of wrong answers among attempts, 0.0 with no attempts.
    pub fn difficulty(&self) -> f64 {
        if self.attempts() == 0 {
            0.0
        } else {
            f64::from(self.incorrect) / f64::from(self.attempts())
        }
    }
}

/// One line of session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub taken_at: DateTime<Utc>,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Durable learning statistics, persisted as a single JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearnStats {
    pub quizzes_taken: u32,
    /// Sum of session percentages; divided by the count for the average.
    pub total_percentage: f64,
    pub study_time_secs: f64,
    /// Word count in the store at the last fold.
    pub total_words: usize,
    /// Keyed by word id.
    pub word_tallies: HashMap<String, WordTally>,
    pub history: Vec<HistoryEntry>,
}

impl LearnStats {
    /// Loads the persisted statistics, degrading to the zero state when
    /// nothing usable is stored.
    pub fn load(backend: &dyn StorageBackend) -> Self {
        match backend.get(STATS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(stats) => stats,
                Err(e) => {
                    tracing::warn!("stored statistics are corrupt, starting fresh: {e}");
                    LearnStats::default()
                }
            },
            Ok(None) => LearnStats::default(),
            Err(e) => {
                tracing::warn!("failed to read statistics: {e:#}");
                LearnStats::default()
            }
        }
    }

    pub fn flush(&self, backend: &mut dyn StorageBackend) -> Result<()> {
        let raw = serde_json::to_string(self).context("failed to serialize statistics")?;
        backend.set(STATS_KEY, &raw)
    }

    /// Folds one finished session into the aggregate.
    pub fn record(&mut self, results: &QuizResults, total_words: usize) {
        self.quizzes_taken += 1;
        self.total_percentage += results.percentage;
        self.study_time_secs += results.elapsed_secs;
        self.total_words = total_words;

        for quiz_word in &results.correct {
            let tally = self
                .word_tallies
                .entry(quiz_word.word.id.clone())
                .or_default();
            tally.word = quiz_word.word.original_word.clone();
            tally.correct += 1;
        }
        for quiz_word in &results.incorrect {
            let tally = self
                .word_tallies
                .entry(quiz_word.word.id.clone())
                .or_default();
            tally.word = quiz_word.word.original_word.clone();
            tally.incorrect += 1;
        }

        self.history.push(HistoryEntry {
            taken_at: results.finished_at,
            score: results.score,
            total: results.total,
            percentage: results.percentage,
        });
        while self.history.len() > HISTORY_CAP {
            self.history.remove(0);
        }
    }

    /// Mean percentage over all recorded sessions.
    pub fn average_percentage(&self) -> f64 {
        if self.quizzes_taken == 0 {
            0.0
        } else {
            self.total_percentage / f64::from(self.quizzes_taken)
        }
    }

    /// The words with the highest share of wrong answers, hardest first.
    pub fn most_difficult_words(&self) -> Vec<&WordTally> {
        let mut tallies: Vec<&WordTally> = self
            .word_tallies
            .values()
            .filter(|t| t.attempts() > 0)
            .collect();
        tallies.sort_by(|a, b| {
            b.difficulty()
                .partial_cmp(&a.difficulty())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.incorrect.cmp(&a.incorrect))
                .then_with(|| a.word.cmp(&b.word))
        });
        tallies.truncate(MOST_DIFFICULT_CAP);
        tallies
    }

    /// Back to the zero state.
    pub fn reset(&mut self) {
        *self = LearnStats::default();
    }
}
