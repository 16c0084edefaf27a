//! Progression leveling rules.
//!
//! A word's mastery level moves one step per quiz verdict and stays inside
//! `0..=7`. The level alone decides whether a question runs forward or
//! reverse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest level: a brand-new word.
pub const MIN_LEVEL: u8 = 0;
/// Highest level: the word counts as known.
pub const MAX_LEVEL: u8 = 7;
/// Words at or above this level are asked in reverse direction.
pub const REVERSE_THRESHOLD: u8 = 2;

/// A word's mastery level, clamped to `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(MIN_LEVEL);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Builds a level, clamping out-of-range input.
    pub fn new(value: u8) -> Self {
        Level(value.min(MAX_LEVEL))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One step up, saturating at [`Level::MAX`].
    pub fn raised(self) -> Self {
        Level((self.0 + 1).min(MAX_LEVEL))
    }

    /// One step down, saturating at [`Level::MIN`].
    pub fn lowered(self) -> Self {
        Level(self.0.saturating_sub(1))
    }

    /// Applies a quiz verdict: up on correct, down on incorrect.
    pub fn scored(self, correct: bool) -> Self {
        if correct {
            self.raised()
        } else {
            self.lowered()
        }
    }

    /// Whether questions for this level run in reverse direction.
    pub fn is_reverse(self) -> bool {
        self.0 >= REVERSE_THRESHOLD
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Stored data may carry out-of-range values; clamp instead of failing the
// whole collection load.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Level::new(raw.clamp(0, i64::from(MAX_LEVEL)) as u8))
    }
}
