//! Card evolution tiers and health classification.
//!
//! A card's tier (0-3) is recomputed from its performance history after
//! every review, but never regresses: promotion conditions only gate the
//! climb. The tier feeds combat as a damage multiplier and a crit bonus.

use crate::core::constants::*;
use crate::core::types::{AnswerQuality, CardState};
use serde::{Deserialize, Serialize};

/// Struggle classification for a card, driving requeue/hint decisions
/// upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardHealth {
    Healthy,
    Struggling,
    /// Chronic failure. Takes priority over Struggling.
    Leech,
}

/// Computes the evolution tier for a card. Pure function.
///
/// Each rung requires a streak of at least [`TIER_PROMOTION_STREAK`]
/// consecutive correct answers plus every previous rung's condition:
/// - 0 -> 1: card has left the `New` state
/// - 1 -> 2: stability >= 10
/// - 2 -> 3: stability >= 30 and no lapses since the last promotion
///
/// The result is `max(computed, current_tier)`: tiers are monotonic even
/// if the streak or stability later collapse.
pub fn evaluate_tier(
    consecutive_correct: u32,
    current_tier: u8,
    card_state: CardState,
    stability: f64,
    lapses_since_tier: u32,
) -> u8 {
    let mut computed = 0;

    if consecutive_correct >= TIER_PROMOTION_STREAK && card_state != CardState::New {
        computed = 1;
        if stability >= TIER_2_MIN_STABILITY {
            computed = 2;
            if stability >= TIER_3_MIN_STABILITY && lapses_since_tier == 0 {
                computed = 3;
            }
        }
    }

    computed.max(current_tier).min(MAX_EVOLUTION_TIER)
}

/// Damage multiplier granted by an evolution tier.
/// Out-of-range tiers clamp to the top of the table.
pub fn tier_damage_multiplier(tier: u8) -> f64 {
    let index = (tier as usize).min(TIER_DAMAGE_MULTIPLIERS.len() - 1);
    TIER_DAMAGE_MULTIPLIERS[index]
}

/// Crit-chance bonus (percentage points) granted by an evolution tier.
pub fn tier_crit_bonus(tier: u8) -> u32 {
    let index = (tier as usize).min(TIER_CRIT_BONUSES.len() - 1);
    TIER_CRIT_BONUSES[index]
}

/// Classifies a card from its recent answer history and lifetime lapses.
///
/// Leech wins over everything; otherwise a card is Struggling when at
/// least 3 of its last 5 recorded qualities were failures.
pub fn classify_health(recent_qualities: &[AnswerQuality], total_lapses: u32) -> CardHealth {
    if total_lapses >= LEECH_LAPSE_THRESHOLD {
        return CardHealth::Leech;
    }

    let window_start = recent_qualities.len().saturating_sub(STRUGGLING_WINDOW);
    let failures = recent_qualities[window_start..]
        .iter()
        .filter(|q| q.is_failure())
        .count();

    if failures >= STRUGGLING_FAILURE_THRESHOLD {
        CardHealth::Struggling
    } else {
        CardHealth::Healthy
    }
}
