//! Reward math and the XP level curve.
//!
//! The caller owns the player profile; this module only turns an
//! encounter's quality tally into an XP/gold delta and answers "how much
//! XP does level N need".

use crate::combat::types::QualityTally;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Aggregate reward tuple handed back to the caller after an encounter
/// or a dungeon run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatRewards {
    pub xp: u64,
    pub gold: u64,
    pub bonus_multiplier: f64,
}

/// Calculates the XP required to reach the next level
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)) as u64
}

/// Derives the reward for a finished encounter.
///
/// Base XP is the enemy's reward plus per-quality weights from the
/// tally; gold is the enemy's gold reward. Streak and class bonuses are
/// percentages applied multiplicatively, results floored.
pub fn combat_rewards(
    tally: &QualityTally,
    enemy_xp: u64,
    enemy_gold: u64,
    streak_bonus_percent: f64,
    class_bonus_percent: f64,
) -> CombatRewards {
    let quality_xp = tally.perfect as u64 * XP_PER_PERFECT
        + tally.correct as u64 * XP_PER_CORRECT
        + tally.partial as u64 * XP_PER_PARTIAL;

    let bonus = (1.0 + streak_bonus_percent / 100.0) * (1.0 + class_bonus_percent / 100.0);
    let xp = ((enemy_xp + quality_xp) as f64 * bonus).floor() as u64;
    let gold = (enemy_gold as f64 * bonus).floor() as u64;

    CombatRewards {
        xp,
        gold,
        bonus_multiplier: bonus,
    }
}
