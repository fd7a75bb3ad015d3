//! Shared enums consumed from external collaborators.
//!
//! `AnswerQuality` arrives from the answer evaluator, `CardState` from
//! the spaced-repetition scheduler. Both are closed enums so every
//! damage table, weight table and description builder matches
//! exhaustively.

use serde::{Deserialize, Serialize};

/// Quality signal for one answered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerQuality {
    Perfect,
    Correct,
    Partial,
    Wrong,
    Timeout,
}

impl AnswerQuality {
    /// Whether this quality counts as a failure for card-health tracking.
    ///
    /// Partial credit damages the enemy in combat but still counts
    /// against the card here; the asymmetry is intentional.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            AnswerQuality::Partial | AnswerQuality::Wrong | AnswerQuality::Timeout
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnswerQuality::Perfect => "Perfect",
            AnswerQuality::Correct => "Correct",
            AnswerQuality::Partial => "Partial",
            AnswerQuality::Wrong => "Wrong",
            AnswerQuality::Timeout => "Timeout",
        }
    }
}

/// Scheduler state of a card, as reported by the spaced-repetition
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    New,
    Learning,
    Review,
    Relearning,
}
