//! Integration test: complete dungeon run
//!
//! Drives the full flow: create run → scale enemy per floor → fight with
//! answer qualities → complete floors → terminal payout.

use lorecrawl::combat::{
    combat_outcome, combat_rewards, resolve_turn, CombatOutcome, CombatState, Enemy, EnemyTier,
    TurnInput,
};
use lorecrawl::core::types::AnswerQuality;
use lorecrawl::dungeon::{
    complete_floor, create_dungeon_run, current_floor_config, final_rewards, record_defeat,
    retreat, scale_enemy_for_floor,
};
use lorecrawl::modes::RetrievalMode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn floor_enemy(floor: u32) -> Enemy {
    Enemy::new(
        format!("Floor {} Lexicant", floor),
        EnemyTier::Common,
        40,
        8,
        30,
        20,
    )
}

fn strong_player() -> TurnInput {
    TurnInput {
        attack: 50,
        defense: 10,
        crit_chance: 0,
        evolution_tier: 0,
        mode: RetrievalMode::Standard,
    }
}

/// Fights one encounter answering Correct every turn. With zero crit
/// chance the outcome is fully deterministic.
fn fight_floor(enemy: Enemy, player_hp: u32, player_max_hp: u32) -> (CombatOutcome, CombatState) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut state = CombatState::new(enemy, player_hp, player_max_hp);
    let input = strong_player();

    for _ in 0..100 {
        resolve_turn(&mut state, AnswerQuality::Correct, &input, &mut rng);
        match combat_outcome(&state) {
            CombatOutcome::Ongoing => continue,
            terminal => return (terminal, state),
        }
    }
    panic!("encounter did not terminate");
}

#[test]
fn test_full_clear_pays_double() {
    let mut run = create_dungeon_run(100, 100, false);
    assert_eq!(run.max_floors, 5);

    while !run.is_over() {
        let config = current_floor_config(&run);
        let enemy = scale_enemy_for_floor(&floor_enemy(config.floor), &config);

        if config.floor == run.max_floors {
            assert!(config.is_boss_floor);
            assert_eq!(enemy.tier, EnemyTier::Boss);
        } else {
            assert_eq!(enemy.tier, EnemyTier::Common);
        }

        let (outcome, state) = fight_floor(enemy, run.player_hp, run.player_max_hp);
        assert_eq!(outcome, CombatOutcome::Victory, "strong player should win");

        let rewards = combat_rewards(&state, 0.0, 0.0);
        complete_floor(&mut run, rewards.gold, rewards.xp, state.player_current_hp);
    }

    assert!(run.completed);
    assert!(!run.defeated && !run.retreated);
    assert_eq!(run.floors_completed, 5);

    let payout = final_rewards(&run);
    assert_eq!(payout.bonus_multiplier, 2.0);
    assert_eq!(payout.gold, run.accumulated_gold * 2);
    assert_eq!(payout.xp, run.accumulated_xp * 2);
    assert!(payout.gold > 0);
}

#[test]
fn test_enemy_scaling_grows_per_floor() {
    let mut run = create_dungeon_run(100, 100, false);
    let mut previous_hp = 0;

    for floor in 1..=5 {
        run.current_floor = floor;
        let config = current_floor_config(&run);
        let enemy = scale_enemy_for_floor(&floor_enemy(floor), &config);
        assert!(
            enemy.max_hp > previous_hp,
            "floor {} enemy should be tougher than the last",
            floor
        );
        previous_hp = enemy.max_hp;
    }

    // Base 40 HP at 3.3x boss multiplier
    assert_eq!(previous_hp, 132);
}

#[test]
fn test_defeat_mid_run_halves_payout() {
    let mut run = create_dungeon_run(100, 100, false);
    complete_floor(&mut run, 21, 31, 60);
    complete_floor(&mut run, 25, 39, 20);
    record_defeat(&mut run);

    assert_eq!(run.player_hp, 0);
    let payout = final_rewards(&run);
    assert_eq!(payout.bonus_multiplier, 0.5);
    assert_eq!(payout.gold, 23); // floor(46 * 0.5)
    assert_eq!(payout.xp, 35); // floor(70 * 0.5)
}

#[test]
fn test_retreat_keeps_earnings() {
    let mut run = create_dungeon_run(100, 100, true);
    assert_eq!(run.max_floors, 8);

    complete_floor(&mut run, 40, 55, 70);
    complete_floor(&mut run, 44, 62, 45);
    retreat(&mut run);

    let payout = final_rewards(&run);
    assert_eq!(payout.bonus_multiplier, 1.0);
    assert_eq!(payout.gold, 84);
    assert_eq!(payout.xp, 117);
}

#[test]
fn test_hp_carries_between_floors() {
    let mut run = create_dungeon_run(100, 100, false);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let config = current_floor_config(&run);
    let enemy = scale_enemy_for_floor(&floor_enemy(1), &config);
    let mut state = CombatState::new(enemy, run.player_hp, run.player_max_hp);
    let input = strong_player();

    // One lapse lets the enemy land a hit, then finish it off
    resolve_turn(&mut state, AnswerQuality::Wrong, &input, &mut rng);
    assert!(state.player_current_hp < 100, "the enemy should land hits");
    while combat_outcome(&state) == CombatOutcome::Ongoing {
        resolve_turn(&mut state, AnswerQuality::Correct, &input, &mut rng);
    }
    assert_eq!(combat_outcome(&state), CombatOutcome::Victory);

    let hp_after_first = state.player_current_hp;
    let rewards = combat_rewards(&state, 0.0, 0.0);
    complete_floor(&mut run, rewards.gold, rewards.xp, hp_after_first);

    assert_eq!(run.player_hp, hp_after_first);
    assert_eq!(run.current_floor, 2);
}
