//! Main simulation runner.
//!
//! Drives the real resolution functions (combat, boss phases, loot,
//! events, dungeon orchestration) with synthetic answer qualities drawn
//! from the configured accuracy profile. Statistics are tracked
//! externally from the returned events.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::boss::{current_phase, default_boss_phases, is_boss_enemy};
use crate::combat::{
    combat_outcome, combat_rewards, resolve_turn, CombatOutcome, CombatState, Enemy, EnemyTier,
    TurnInput,
};
use crate::core::types::{AnswerQuality, CardState};
use crate::dungeon::{
    complete_floor, create_dungeon_run, current_floor_config, final_rewards, record_defeat,
    scale_enemy_for_floor, should_trigger_event,
};
use crate::events::roll_for_event;
use crate::evolution::tier_crit_bonus;
use crate::loot::roll_loot;
use crate::modes::select_mode;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - floors {}, turns {}, gold {}, xp {}, {}",
                run_idx + 1,
                config.num_runs,
                run_stats.floors_cleared,
                run_stats.total_turns,
                run_stats.gold_earned,
                run_stats.xp_earned,
                if run_stats.completed {
                    "completed"
                } else {
                    "defeated"
                }
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Draws an answer quality from the configured accuracy profile.
fn draw_quality(config: &SimConfig, rng: &mut impl Rng) -> AnswerQuality {
    let roll = rng.gen::<f64>();
    let mut threshold = config.perfect_rate;
    if roll < threshold {
        return AnswerQuality::Perfect;
    }
    threshold += config.correct_rate;
    if roll < threshold {
        return AnswerQuality::Correct;
    }
    threshold += config.partial_rate;
    if roll < threshold {
        return AnswerQuality::Partial;
    }
    threshold += config.wrong_rate;
    if roll < threshold {
        return AnswerQuality::Wrong;
    }
    AnswerQuality::Timeout
}

/// Base enemy for a floor, before scaling. Stats grow gently with the
/// simulated player level so deeper profiles stay comparable.
fn base_floor_enemy(config: &SimConfig, rng: &mut impl Rng) -> Enemy {
    let tier = if rng.gen::<f64>() < 0.2 {
        EnemyTier::Elite
    } else {
        EnemyTier::Common
    };
    let level = config.player_level;
    Enemy::new(
        "Lexicant".to_string(),
        tier,
        30 + 6 * level,
        4 + level,
        (20 + 4 * level) as u64,
        (12 + 3 * level) as u64,
    )
}

/// Simulate a single dungeon run from entry to a terminal state.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut run = create_dungeon_run(config.player_hp, config.player_hp, config.extended_dungeon);
    let phases = default_boss_phases();

    let mut stats = RunStats::default();
    let mut session_modes = Vec::new();
    let mut turns: u64 = 0;

    while !run.is_over() && turns < config.max_turns_per_run {
        let floor_config = current_floor_config(&run);
        let enemy = scale_enemy_for_floor(&base_floor_enemy(config, rng), &floor_config);
        let base_attack = enemy.attack;
        let phased = is_boss_enemy(enemy.tier);

        let mut state = CombatState::new(enemy, run.player_hp, run.player_max_hp);

        // Fight the floor encounter
        loop {
            if turns >= config.max_turns_per_run {
                break;
            }
            turns += 1;

            // Boss/elite enemies hit harder as their HP drops
            if phased {
                if let Some(phase) = current_phase(&phases, state.enemy.hp_fraction()) {
                    state.enemy.attack =
                        (base_attack as f64 * phase.damage_multiplier).round() as u32;
                }
            }

            let mode = select_mode(CardState::Review, &[], &session_modes, rng, None);
            session_modes.push(mode);

            let quality = draw_quality(config, rng);
            let input = TurnInput {
                attack: config.player_attack,
                defense: config.player_defense,
                crit_chance: config.player_crit_chance + tier_crit_bonus(config.evolution_tier),
                evolution_tier: config.evolution_tier,
                mode,
            };
            resolve_turn(&mut state, quality, &input, rng);

            match combat_outcome(&state) {
                CombatOutcome::Ongoing => continue,
                CombatOutcome::Victory => {
                    stats.victories += 1;
                    let rewards = combat_rewards(&state, 0.0, 0.0);
                    complete_floor(&mut run, rewards.gold, rewards.xp, state.player_current_hp);

                    if let Some(item) = roll_loot(state.enemy.tier, rng) {
                        stats.record_drop(item.rarity);
                    }
                    break;
                }
                CombatOutcome::Defeat => {
                    record_defeat(&mut run);
                    break;
                }
            }
        }

        // Between floors: an optional event, resolved with a coin-flip choice
        if !run.is_over() && should_trigger_event(rng) {
            let hp_percent = run.player_hp as f64 / run.player_max_hp.max(1) as f64 * 100.0;
            if let Some(event) = roll_for_event(hp_percent, rng) {
                stats.events_triggered += 1;
                let choice = rng.gen_range(0..event.choices.len());
                let outcome = crate::events::resolve_event_choice(
                    &event,
                    choice,
                    config.player_level,
                    run.player_max_hp,
                    rng,
                );
                apply_event_outcome(&mut run, &outcome);
            }
        }
    }

    let payout = final_rewards(&run);
    stats.completed = run.completed;
    stats.defeated = run.defeated;
    stats.floors_cleared = run.floors_completed;
    stats.total_turns = turns;
    stats.gold_earned = payout.gold;
    stats.xp_earned = payout.xp;
    stats.final_hp = run.player_hp;
    stats
}

fn apply_event_outcome(run: &mut crate::dungeon::DungeonRunState, outcome: &crate::events::EventOutcome) {
    if outcome.gold_delta >= 0 {
        run.accumulated_gold += outcome.gold_delta as u64;
    } else {
        run.accumulated_gold = run.accumulated_gold.saturating_sub((-outcome.gold_delta) as u64);
    }
    run.accumulated_xp += outcome.xp_gained;
    if outcome.hp_delta >= 0 {
        run.player_hp = (run.player_hp + outcome.hp_delta as u32).min(run.player_max_hp);
    } else {
        run.player_hp = run.player_hp.saturating_sub((-outcome.hp_delta) as u32);
        if run.player_hp == 0 {
            record_defeat(run);
        }
    }
}
