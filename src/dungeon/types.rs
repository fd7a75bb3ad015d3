//! Dungeon run state.

use serde::{Deserialize, Serialize};

/// A dungeon run in progress. HP carries across floors; gold and XP
/// accumulate and are only paid out when the run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonRunState {
    pub current_floor: u32,
    pub max_floors: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub accumulated_gold: u64,
    pub accumulated_xp: u64,
    pub floors_completed: u32,
    pub completed: bool,
    pub defeated: bool,
    pub retreated: bool,
}

impl DungeonRunState {
    /// Whether the run has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.completed || self.defeated || self.retreated
    }
}

/// Scaling parameters for one floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorConfig {
    pub floor: u32,
    pub enemy_hp_multiplier: f64,
    pub reward_multiplier: f64,
    pub is_boss_floor: bool,
}

/// Final payout for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRewards {
    pub gold: u64,
    pub xp: u64,
    pub bonus_multiplier: f64,
}
