//! Per-turn combat resolution.
//!
//! One call per answered card: pending poison ticks first, then the
//! answer quality decides who takes damage. Evolution tier and retrieval
//! mode arrive as multipliers on the player's attack. HP is clamped on
//! both sides every turn.

use super::types::{CombatState, TurnAction, TurnEvent};
use crate::core::constants::*;
use crate::core::types::AnswerQuality;
use crate::evolution::tier_damage_multiplier;
use crate::modes::{mode_damage_multiplier, RetrievalMode};
use crate::progression;
use rand::Rng;

/// Actor stats for one turn, supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct TurnInput {
    pub attack: u32,
    pub defense: u32,
    /// Crit chance in percent, tier bonus already folded in by the caller.
    pub crit_chance: u32,
    pub evolution_tier: u8,
    pub mode: RetrievalMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// Resolves one combat turn, mutating the encounter state and returning
/// the events that occurred (a poison tick can precede the answer event).
pub fn resolve_turn(
    state: &mut CombatState,
    quality: AnswerQuality,
    input: &TurnInput,
    rng: &mut impl Rng,
) -> Vec<TurnEvent> {
    let mut events = Vec::new();

    // Pending poison from a previous Timeout fires before the answer
    if state.poison_damage > 0 {
        let poison = state.poison_damage;
        state.player_current_hp = state.player_current_hp.saturating_sub(poison);
        state.poison_damage = 0;
        let event = TurnEvent {
            action: TurnAction::PoisonTick,
            damage: poison,
            description: format!("Poison seeps in for {poison} damage"),
        };
        state.add_log_entry(event.description.clone());
        events.push(event);
    }

    let evo_mult = tier_damage_multiplier(input.evolution_tier);
    let mode_mult = mode_damage_multiplier(input.mode);

    let event = match quality {
        AnswerQuality::Perfect => {
            let crit = rng.gen::<f64>() < input.crit_chance as f64 / 100.0;
            let quality_mult = if crit {
                PERFECT_CRIT_DAMAGE_MULTIPLIER
            } else {
                PERFECT_DAMAGE_MULTIPLIER
            };
            let damage = scaled_damage(input.attack, quality_mult, evo_mult, mode_mult);
            state.enemy.take_damage(damage);
            if crit {
                TurnEvent {
                    action: TurnAction::PlayerCrit,
                    damage,
                    description: format!("Critical strike! {} takes {damage} damage", state.enemy.name),
                }
            } else {
                TurnEvent {
                    action: TurnAction::PlayerHit,
                    damage,
                    description: format!("A flawless recall hits {} for {damage}", state.enemy.name),
                }
            }
        }
        AnswerQuality::Correct => {
            let damage = scaled_damage(input.attack, CORRECT_DAMAGE_MULTIPLIER, evo_mult, mode_mult);
            state.enemy.take_damage(damage);
            TurnEvent {
                action: TurnAction::PlayerHit,
                damage,
                description: format!("{} takes {damage} damage", state.enemy.name),
            }
        }
        AnswerQuality::Partial => {
            let damage = scaled_damage(input.attack, PARTIAL_DAMAGE_MULTIPLIER, evo_mult, mode_mult);
            state.enemy.take_damage(damage);
            TurnEvent {
                action: TurnAction::PlayerHit,
                damage,
                description: format!("A glancing blow deals {damage} to {}", state.enemy.name),
            }
        }
        AnswerQuality::Wrong => enemy_strike(state, input.defense, "strikes back"),
        AnswerQuality::Timeout => {
            let event = enemy_strike(state, input.defense, "punishes your hesitation");
            // Venom lands on the next turn
            state.poison_damage = TIMEOUT_POISON_DAMAGE;
            event
        }
    };

    state.add_log_entry(event.description.clone());
    events.push(event);

    state.cards_answered += 1;
    state.tally.record(quality);

    events
}

fn scaled_damage(attack: u32, quality_mult: f64, evo_mult: f64, mode_mult: f64) -> u32 {
    (attack as f64 * quality_mult * evo_mult * mode_mult).floor() as u32
}

fn enemy_strike(state: &mut CombatState, defense: u32, verb: &str) -> TurnEvent {
    let damage = state.enemy.attack.saturating_sub(defense).max(MIN_ENEMY_DAMAGE);
    state.player_current_hp = state.player_current_hp.saturating_sub(damage);
    TurnEvent {
        action: TurnAction::EnemyHit,
        damage,
        description: format!("{} {verb} for {damage} damage", state.enemy.name),
    }
}

/// Terminal check. The enemy's death takes priority when both sides hit
/// zero on the same turn.
pub fn combat_outcome(state: &CombatState) -> CombatOutcome {
    if !state.enemy.is_alive() {
        CombatOutcome::Victory
    } else if !state.is_player_alive() {
        CombatOutcome::Defeat
    } else {
        CombatOutcome::Ongoing
    }
}

/// Aggregate reward for a finished encounter, derived from the quality
/// tally and the enemy's reward fields. The XP level curve itself lives
/// in [`crate::progression`].
pub fn combat_rewards(
    state: &CombatState,
    streak_bonus_percent: f64,
    class_bonus_percent: f64,
) -> progression::CombatRewards {
    progression::combat_rewards(
        &state.tally,
        state.enemy.xp_reward,
        state.enemy.gold_reward,
        streak_bonus_percent,
        class_bonus_percent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::{CombatState, Enemy, EnemyTier};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn encounter(enemy_hp: u32, enemy_attack: u32) -> CombatState {
        let enemy = Enemy::new(
            "Grammar Ghoul".to_string(),
            EnemyTier::Common,
            enemy_hp,
            enemy_attack,
            30,
            15,
        );
        CombatState::new(enemy, 100, 100)
    }

    fn input(attack: u32, defense: u32, crit: u32, tier: u8, mode: RetrievalMode) -> TurnInput {
        TurnInput {
            attack,
            defense,
            crit_chance: crit,
            evolution_tier: tier,
            mode,
        }
    }

    #[test]
    fn test_correct_damage_with_tier_multiplier() {
        // attack 10, tier 2 (x1.5), standard mode => floor(10 * 1.5) = 15
        let mut state = encounter(100, 5);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Correct,
            &input(10, 3, 0, 2, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].damage, 15);
        assert_eq!(state.enemy.current_hp, 85);
    }

    #[test]
    fn test_perfect_non_crit_tier_3_teach() {
        // attack 10, Perfect non-crit (x2), tier 3 (x2), Teach (x1.5) => 60
        let mut state = encounter(200, 5);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Perfect,
            &input(10, 0, 0, 3, RetrievalMode::Teach),
            &mut rng(),
        );
        assert_eq!(events[0].action, TurnAction::PlayerHit);
        assert_eq!(events[0].damage, 60);
    }

    #[test]
    fn test_perfect_guaranteed_crit() {
        // 100% crit chance: floor(10 * 2.5) = 25
        let mut state = encounter(100, 5);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Perfect,
            &input(10, 0, 100, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events[0].action, TurnAction::PlayerCrit);
        assert_eq!(events[0].damage, 25);
    }

    #[test]
    fn test_zero_crit_chance_never_crits() {
        let mut rng = rng();
        for _ in 0..100 {
            let mut state = encounter(10000, 0);
            let events = resolve_turn(
                &mut state,
                AnswerQuality::Perfect,
                &input(10, 0, 0, 0, RetrievalMode::Standard),
                &mut rng,
            );
            assert_eq!(events[0].action, TurnAction::PlayerHit);
            assert_eq!(events[0].damage, 20);
        }
    }

    #[test]
    fn test_partial_halves_damage() {
        let mut state = encounter(100, 5);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Partial,
            &input(10, 0, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events[0].damage, 5);
        assert_eq!(state.enemy.current_hp, 95);
    }

    #[test]
    fn test_wrong_answer_enemy_hits_through_defense() {
        let mut state = encounter(100, 12);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Wrong,
            &input(10, 3, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events[0].action, TurnAction::EnemyHit);
        assert_eq!(events[0].damage, 9);
        assert_eq!(state.player_current_hp, 91);
        assert_eq!(state.enemy.current_hp, 100);
    }

    #[test]
    fn test_enemy_damage_floor_of_one() {
        let mut state = encounter(100, 5);
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Wrong,
            &input(10, 50, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events[0].damage, 1);
    }

    #[test]
    fn test_timeout_arms_poison_for_next_turn() {
        let mut state = encounter(100, 10);
        resolve_turn(
            &mut state,
            AnswerQuality::Timeout,
            &input(10, 0, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(state.poison_damage, TIMEOUT_POISON_DAMAGE);
        let hp_after_timeout = state.player_current_hp;

        // Next turn: poison fires first, then the answer resolves
        let events = resolve_turn(
            &mut state,
            AnswerQuality::Correct,
            &input(10, 0, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, TurnAction::PoisonTick);
        assert_eq!(events[0].damage, TIMEOUT_POISON_DAMAGE);
        assert_eq!(
            state.player_current_hp,
            hp_after_timeout - TIMEOUT_POISON_DAMAGE
        );
        assert_eq!(state.poison_damage, 0, "poison resets after firing");
    }

    #[test]
    fn test_poison_does_not_stack_or_linger() {
        let mut state = encounter(100, 10);
        let stats = input(10, 0, 0, 0, RetrievalMode::Standard);
        resolve_turn(&mut state, AnswerQuality::Timeout, &stats, &mut rng());
        resolve_turn(&mut state, AnswerQuality::Timeout, &stats, &mut rng());
        // Re-armed to 5, not 10
        assert_eq!(state.poison_damage, TIMEOUT_POISON_DAMAGE);
        resolve_turn(&mut state, AnswerQuality::Correct, &stats, &mut rng());
        assert_eq!(state.poison_damage, 0);
    }

    #[test]
    fn test_hp_clamped_at_zero() {
        let mut state = encounter(100, 500);
        state.player_current_hp = 3;
        resolve_turn(
            &mut state,
            AnswerQuality::Wrong,
            &input(10, 0, 0, 0, RetrievalMode::Standard),
            &mut rng(),
        );
        assert_eq!(state.player_current_hp, 0);
    }

    #[test]
    fn test_hp_invariants_over_random_turns() {
        let mut rng = rng();
        let qualities = [
            AnswerQuality::Perfect,
            AnswerQuality::Correct,
            AnswerQuality::Partial,
            AnswerQuality::Wrong,
            AnswerQuality::Timeout,
        ];
        let mut state = encounter(500, 30);
        let stats = input(8, 2, 50, 3, RetrievalMode::Teach);
        for i in 0..200 {
            let quality = qualities[i % qualities.len()];
            resolve_turn(&mut state, quality, &stats, &mut rng);
            assert!(state.player_current_hp <= state.player_max_hp);
            assert!(state.enemy.current_hp <= state.enemy.max_hp);
        }
    }

    #[test]
    fn test_tally_and_counter_update() {
        let mut state = encounter(1000, 5);
        let stats = input(10, 0, 0, 0, RetrievalMode::Standard);
        let mut rng = rng();
        resolve_turn(&mut state, AnswerQuality::Perfect, &stats, &mut rng);
        resolve_turn(&mut state, AnswerQuality::Wrong, &stats, &mut rng);
        resolve_turn(&mut state, AnswerQuality::Correct, &stats, &mut rng);
        assert_eq!(state.cards_answered, 3);
        assert_eq!(state.tally.perfect, 1);
        assert_eq!(state.tally.wrong, 1);
        assert_eq!(state.tally.correct, 1);
        assert_eq!(state.combat_log.len(), 3);
    }

    #[test]
    fn test_victory_takes_priority_over_defeat() {
        let mut state = encounter(100, 10);
        state.enemy.current_hp = 0;
        state.player_current_hp = 0;
        assert_eq!(combat_outcome(&state), CombatOutcome::Victory);
    }

    #[test]
    fn test_combat_outcome_states() {
        let mut state = encounter(100, 10);
        assert_eq!(combat_outcome(&state), CombatOutcome::Ongoing);
        state.player_current_hp = 0;
        assert_eq!(combat_outcome(&state), CombatOutcome::Defeat);
        state.player_current_hp = 50;
        state.enemy.current_hp = 0;
        assert_eq!(combat_outcome(&state), CombatOutcome::Victory);
    }

    #[test]
    fn test_combat_rewards_scale_with_bonuses() {
        let mut state = encounter(100, 10);
        let stats = input(10, 0, 0, 0, RetrievalMode::Standard);
        let mut rng = rng();
        resolve_turn(&mut state, AnswerQuality::Perfect, &stats, &mut rng);
        resolve_turn(&mut state, AnswerQuality::Correct, &stats, &mut rng);

        let base = combat_rewards(&state, 0.0, 0.0);
        let boosted = combat_rewards(&state, 50.0, 20.0);
        assert!(boosted.xp > base.xp);
        assert!(boosted.gold > base.gold);
        // xp = (30 + 5 + 3) * 1.5 * 1.2 = 68.4 -> 68
        assert_eq!(boosted.xp, 68);
    }
}
