//! Boss phase table.
//!
//! Boss and elite enemies escalate through HP-threshold phases. The
//! lookup scans the table in descending-threshold order and keeps the
//! last phase whose threshold is strictly greater than the current HP
//! fraction, so boundary values belong to the healthier phase.

use crate::combat::types::EnemyTier;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossPhase {
    pub name: String,
    /// Phase applies below this HP fraction.
    pub hp_threshold: f64,
    pub damage_multiplier: f64,
    pub xp_multiplier: f64,
    pub hints_enabled: bool,
    /// Seconds removed from the answer timer in this phase.
    pub timer_penalty_seconds: u32,
}

/// The standard three-phase table, thresholds strictly descending.
pub fn default_boss_phases() -> Vec<BossPhase> {
    vec![
        BossPhase {
            name: "Awakening".to_string(),
            hp_threshold: PHASE_AWAKENING_THRESHOLD,
            damage_multiplier: 1.0,
            xp_multiplier: 1.0,
            hints_enabled: true,
            timer_penalty_seconds: 0,
        },
        BossPhase {
            name: "Fury".to_string(),
            hp_threshold: PHASE_FURY_THRESHOLD,
            damage_multiplier: PHASE_FURY_DAMAGE_MULT,
            xp_multiplier: PHASE_FURY_XP_MULT,
            hints_enabled: false,
            timer_penalty_seconds: 0,
        },
        BossPhase {
            name: "Enrage".to_string(),
            hp_threshold: PHASE_ENRAGE_THRESHOLD,
            damage_multiplier: PHASE_ENRAGE_DAMAGE_MULT,
            xp_multiplier: PHASE_ENRAGE_XP_MULT,
            hints_enabled: false,
            timer_penalty_seconds: PHASE_ENRAGE_TIMER_PENALTY_SECONDS,
        },
    ]
}

/// Looks up the phase for an HP fraction.
///
/// Keeps the last phase whose threshold is strictly greater than
/// `hp_fraction`; a fraction at or above the highest threshold returns
/// the first (healthiest) phase. An empty table returns `None`.
pub fn current_phase(phases: &[BossPhase], hp_fraction: f64) -> Option<&BossPhase> {
    let mut current = phases.first()?;
    for phase in phases {
        if phase.hp_threshold > hp_fraction {
            current = phase;
        }
    }
    Some(current)
}

/// Returns the new phase if the HP change crossed a phase boundary.
pub fn phase_changed<'a>(
    phases: &'a [BossPhase],
    previous_hp_fraction: f64,
    current_hp_fraction: f64,
) -> Option<&'a BossPhase> {
    let previous = current_phase(phases, previous_hp_fraction)?;
    let current = current_phase(phases, current_hp_fraction)?;
    (previous.name != current.name).then_some(current)
}

/// Whether this enemy tier uses the phase table at all.
pub fn is_boss_enemy(tier: EnemyTier) -> bool {
    matches!(tier, EnemyTier::Boss | EnemyTier::Elite)
}
