//! Retrieval mode selection.
//!
//! Each card is presented in one of four recall formats. The pool a card
//! draws from depends on its scheduler state, meta-progression unlocks,
//! how recently each mode was used for this card, and a session-level
//! variety rule. The final pick is a weighted cumulative draw, so the
//! pool order is part of the semantics.

use crate::core::constants::{MODE_RECENCY_PENALTY, MODE_VARIETY_WINDOW};
use crate::core::types::CardState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetrievalMode {
    /// Front-to-back recall. Always available.
    Standard,
    Reversed,
    /// Explain the answer back. Unlocked via meta-progression.
    Teach,
    Connect,
}

impl RetrievalMode {
    pub fn name(&self) -> &'static str {
        match self {
            RetrievalMode::Standard => "Standard",
            RetrievalMode::Reversed => "Reversed",
            RetrievalMode::Teach => "Teach",
            RetrievalMode::Connect => "Connect",
        }
    }

    /// Meta-progression key required to use this mode, if any.
    pub fn unlock_key(&self) -> Option<&'static str> {
        match self {
            RetrievalMode::Standard | RetrievalMode::Reversed => None,
            RetrievalMode::Teach => Some("teach_back"),
            RetrievalMode::Connect => Some("connect_web"),
        }
    }

    /// Base selection weight before recency penalties.
    fn base_weight(&self) -> f64 {
        match self {
            RetrievalMode::Standard => 1.0,
            RetrievalMode::Reversed => 1.0,
            RetrievalMode::Teach => 0.6,
            RetrievalMode::Connect => 0.8,
        }
    }
}

/// Full pool in draw order. The cumulative walk in [`select_mode`] is
/// order-sensitive, so this stays an ordered slice, never a map.
const MODE_POOL: [RetrievalMode; 4] = [
    RetrievalMode::Standard,
    RetrievalMode::Reversed,
    RetrievalMode::Teach,
    RetrievalMode::Connect,
];

/// Damage multiplier carried by a retrieval mode.
pub fn mode_damage_multiplier(mode: RetrievalMode) -> f64 {
    match mode {
        RetrievalMode::Standard => 1.0,
        RetrievalMode::Reversed => 1.1,
        RetrievalMode::Teach => 1.5,
        RetrievalMode::Connect => 1.2,
    }
}

/// Picks a retrieval mode for a card.
///
/// `recent_modes_for_card` is this card's own mode history (most recent
/// last); `session_modes` is the session-wide history used by the
/// variety rule; `unlocked_keys` gates keyed modes in review.
pub fn select_mode(
    card_state: CardState,
    recent_modes_for_card: &[RetrievalMode],
    session_modes: &[RetrievalMode],
    rng: &mut impl Rng,
    unlocked_keys: Option<&HashSet<String>>,
) -> RetrievalMode {
    // New and relearning cards always get the baseline format
    if matches!(card_state, CardState::New | CardState::Relearning) {
        return RetrievalMode::Standard;
    }

    let mut pool: Vec<RetrievalMode> = match card_state {
        CardState::Learning => vec![RetrievalMode::Standard, RetrievalMode::Reversed],
        _ => MODE_POOL
            .iter()
            .copied()
            .filter(|mode| match mode.unlock_key() {
                None => true,
                Some(key) => unlocked_keys.is_some_and(|keys| keys.contains(key)),
            })
            .collect(),
    };

    // Variety rule: three identical session picks in a row exclude that
    // mode, unless it is the only candidate left
    if let Some(repeated) = repeated_session_mode(session_modes) {
        let filtered: Vec<RetrievalMode> =
            pool.iter().copied().filter(|m| *m != repeated).collect();
        if !filtered.is_empty() {
            pool = filtered;
        }
    }

    weighted_pick(&pool, recent_modes_for_card, rng)
}

/// Returns the mode filling the last [`MODE_VARIETY_WINDOW`] session
/// slots, if they are all the same.
fn repeated_session_mode(session_modes: &[RetrievalMode]) -> Option<RetrievalMode> {
    if session_modes.len() < MODE_VARIETY_WINDOW {
        return None;
    }
    let tail = &session_modes[session_modes.len() - MODE_VARIETY_WINDOW..];
    let first = tail[0];
    tail.iter().all(|m| *m == first).then_some(first)
}

fn weighted_pick(
    pool: &[RetrievalMode],
    recent_modes_for_card: &[RetrievalMode],
    rng: &mut impl Rng,
) -> RetrievalMode {
    let weights: Vec<f64> = pool
        .iter()
        .map(|mode| {
            let occurrences = recent_modes_for_card.iter().filter(|m| *m == mode).count();
            mode.base_weight() * (1.0 - MODE_RECENCY_PENALTY).powi(occurrences as i32)
        })
        .collect();

    let total: f64 = weights.iter().sum();
    let mut roll = rng.gen::<f64>() * total;
    for (mode, weight) in pool.iter().zip(&weights) {
        if roll < *weight {
            return *mode;
        }
        roll -= weight;
    }

    // Float rounding can walk past the final band
    pool[pool.len() - 1]
}
