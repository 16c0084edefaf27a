//! Quiz engine error types.

use thiserror::Error;

use crate::quiz::MIN_POOL;

/// Errors reported by the quiz session engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The eligible pool is too small to build a multiple-choice question
    /// set. The engine stays idle.
    #[error("not enough quizzable words: {eligible} eligible, need at least {min}", min = MIN_POOL)]
    NotEnoughWords { eligible: usize },

    #[error("no quiz session is running")]
    NoSession,

    /// Every question has been resolved; only finishing remains.
    #[error("no question is pending, the session is ready to finish")]
    NoPendingQuestion,

    #[error("the current question was already answered")]
    AlreadyAnswered,
}

impl QuizError {
    /// True for the declined-start condition, which callers report as a
    /// friendly message rather than a failure.
    pub fn is_declined_start(&self) -> bool {
        matches!(self, QuizError::NotEnoughWords { .. })
    }
}
