//! Dungeon run orchestration.
//!
//! A run is a sequential floor gauntlet. Enemies and rewards scale
//! linearly with the floor number, the last floor is always a boss,
//! and the terminal outcome picks the payout multiplier.

use super::types::{DungeonRunState, FloorConfig, RunRewards};
use crate::combat::types::{Enemy, EnemyTier};
use crate::core::constants::*;
use rand::Rng;

/// Starts a fresh run. Extended runs are 8 floors instead of 5.
pub fn create_dungeon_run(player_hp: u32, player_max_hp: u32, extended: bool) -> DungeonRunState {
    let max_floors = if extended {
        DUNGEON_FLOORS_EXTENDED
    } else {
        DUNGEON_FLOORS
    };
    DungeonRunState {
        current_floor: 1,
        max_floors,
        player_hp,
        player_max_hp,
        accumulated_gold: 0,
        accumulated_xp: 0,
        floors_completed: 0,
        completed: false,
        defeated: false,
        retreated: false,
    }
}

/// Scaling for the run's current floor.
pub fn current_floor_config(run: &DungeonRunState) -> FloorConfig {
    let floor = run.current_floor;
    let steps = (floor - 1) as f64;
    let is_boss_floor = floor == run.max_floors;

    let mut enemy_hp_multiplier = 1.0 + FLOOR_HP_SCALING_STEP * steps;
    let mut reward_multiplier = 1.0 + FLOOR_REWARD_SCALING_STEP * steps;
    if is_boss_floor {
        enemy_hp_multiplier *= BOSS_FLOOR_HP_BONUS;
        reward_multiplier *= BOSS_FLOOR_REWARD_BONUS;
    }

    FloorConfig {
        floor,
        enemy_hp_multiplier,
        reward_multiplier,
        is_boss_floor,
    }
}

/// Applies floor scaling to a base enemy. HP and rewards round up so
/// scaling never produces a weaker enemy than the base.
pub fn scale_enemy_for_floor(base: &Enemy, config: &FloorConfig) -> Enemy {
    let max_hp = (base.max_hp as f64 * config.enemy_hp_multiplier).ceil() as u32;
    let tier = if config.is_boss_floor {
        EnemyTier::Boss
    } else {
        base.tier
    };
    Enemy {
        name: base.name.clone(),
        tier,
        max_hp,
        current_hp: max_hp,
        attack: base.attack,
        xp_reward: (base.xp_reward as f64 * config.reward_multiplier).ceil() as u64,
        gold_reward: (base.gold_reward as f64 * config.reward_multiplier).ceil() as u64,
    }
}

/// Records a cleared floor. Marks the run completed when the last
/// floor falls, otherwise advances to the next one.
///
/// A run that already reached a terminal state is left untouched, so a
/// stray completion signal cannot flip a defeated run back to paying out.
pub fn complete_floor(run: &mut DungeonRunState, gold: u64, xp: u64, hp_remaining: u32) {
    if run.is_over() {
        return;
    }
    run.accumulated_gold += gold;
    run.accumulated_xp += xp;
    run.player_hp = hp_remaining;
    run.floors_completed += 1;
    if run.floors_completed >= run.max_floors {
        run.completed = true;
    } else {
        run.current_floor += 1;
    }
}

pub fn record_defeat(run: &mut DungeonRunState) {
    if run.is_over() {
        return;
    }
    run.defeated = true;
    run.player_hp = 0;
}

/// Leaves the run early, keeping whatever has been earned so far.
pub fn retreat(run: &mut DungeonRunState) {
    if run.is_over() {
        return;
    }
    run.retreated = true;
}

/// Payout for a terminal run. A run with no terminal flag pays nothing.
pub fn final_rewards(run: &DungeonRunState) -> RunRewards {
    let (gold, xp, bonus_multiplier) = if run.completed {
        (
            (run.accumulated_gold as f64 * RUN_COMPLETED_MULTIPLIER) as u64,
            (run.accumulated_xp as f64 * RUN_COMPLETED_MULTIPLIER) as u64,
            RUN_COMPLETED_MULTIPLIER,
        )
    } else if run.defeated {
        (
            (run.accumulated_gold as f64 * RUN_DEFEATED_MULTIPLIER).floor() as u64,
            (run.accumulated_xp as f64 * RUN_DEFEATED_MULTIPLIER).floor() as u64,
            RUN_DEFEATED_MULTIPLIER,
        )
    } else if run.retreated {
        (
            run.accumulated_gold,
            run.accumulated_xp,
            RUN_RETREATED_MULTIPLIER,
        )
    } else {
        (0, 0, 0.0)
    };

    RunRewards {
        gold,
        xp,
        bonus_multiplier,
    }
}

/// Independent 30% roll made between floors, before any event table
/// lookup happens.
pub fn should_trigger_event(rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < EVENT_TRIGGER_CHANCE
}
