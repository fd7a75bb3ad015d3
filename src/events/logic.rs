//! Event rolls and choice resolution.
//!
//! A flat 30% draw decides whether anything happens at all; a second
//! weighted draw picks the event, with weights nudged by the player's
//! current HP so low-health runs see more campfires and fewer curses.

use super::types::{EventKind, EventOutcome, RandomEvent, ALL_EVENT_KINDS};
use crate::core::constants::*;
use rand::Rng;

/// Rolls for a between-floor event.
///
/// `hp_percent` is the player's HP as a percentage of max (0-100).
pub fn roll_for_event(hp_percent: f64, rng: &mut impl Rng) -> Option<RandomEvent> {
    if rng.gen::<f64>() >= EVENT_TRIGGER_CHANCE {
        return None;
    }

    let weights: Vec<f64> = ALL_EVENT_KINDS
        .iter()
        .map(|kind| event_weight(*kind, hp_percent))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut roll = rng.gen::<f64>() * total;
    for (kind, weight) in ALL_EVENT_KINDS.iter().zip(&weights) {
        if roll < *weight {
            return Some(RandomEvent::new(*kind));
        }
        roll -= weight;
    }

    // Float rounding fallback: last entry
    Some(RandomEvent::new(ALL_EVENT_KINDS[ALL_EVENT_KINDS.len() - 1]))
}

/// Per-event weight, starting at 1.0 and adjusted by current HP.
fn event_weight(kind: EventKind, hp_percent: f64) -> f64 {
    let mut weight = 1.0;
    match kind {
        EventKind::RestCamp if hp_percent < EVENT_LOW_HP_PERCENT => {
            weight *= REST_CAMP_LOW_HP_WEIGHT;
        }
        EventKind::Shrine if hp_percent > EVENT_HIGH_HP_PERCENT => {
            weight *= SHRINE_HIGH_HP_WEIGHT;
        }
        EventKind::CursedChest if hp_percent < EVENT_CRITICAL_HP_PERCENT => {
            weight *= CURSED_CHEST_CRITICAL_HP_WEIGHT;
        }
        _ => {}
    }
    weight
}

/// Resolves the player's pick for an event.
///
/// An out-of-range `choice_index` clamps to the last valid choice.
/// Reward magnitudes scale linearly with `player_level` and as `ceil`
/// percentages of `max_hp`.
pub fn resolve_event_choice(
    event: &RandomEvent,
    choice_index: usize,
    player_level: u32,
    max_hp: u32,
    rng: &mut impl Rng,
) -> EventOutcome {
    let choice = choice_index.min(event.choices.len() - 1);
    let level = player_level as i64;

    let mut outcome = EventOutcome::default();
    match (event.kind, choice) {
        (EventKind::TreasureRoom, 0) => {
            outcome.gold_delta = 20 + 5 * level;
            outcome.description = "You pocket the coins left in the open.".to_string();
        }
        (EventKind::TreasureRoom, _) => {
            // Risky reach: big purse or a bite
            if rng.gen::<f64>() > 0.5 {
                outcome.gold_delta = 50 + 10 * level;
                outcome.description = "Your fingers close on a hidden purse!".to_string();
            } else {
                outcome.hp_delta = -hp_fraction_amount(max_hp, 0.15);
                outcome.description = "Something in the dark bites back.".to_string();
            }
        }
        (EventKind::Shrine, 0) => {
            outcome.hp_delta = hp_fraction_amount(max_hp, 0.30);
            outcome.description = "Warmth spreads through you.".to_string();
        }
        (EventKind::Shrine, _) => {
            outcome.evolution_boost = true;
            outcome.description = "The shrine hums; your cards feel sharper.".to_string();
        }
        (EventKind::RestCamp, 0) => {
            outcome.hp_delta = hp_fraction_amount(max_hp, 0.40);
            outcome.description = "You sleep deeply and wake restored.".to_string();
        }
        (EventKind::RestCamp, _) => {
            outcome.hp_delta = hp_fraction_amount(max_hp, 0.15);
            outcome.shield_granted = true;
            outcome.description = "A light rest, and you brace for what's ahead.".to_string();
        }
        (EventKind::CursedChest, 0) => {
            if rng.gen::<f64>() > 0.5 {
                outcome.gold_delta = 80 + 15 * level;
                outcome.description = "The whispers were a bluff - treasure!".to_string();
            } else {
                outcome.hp_delta = -hp_fraction_amount(max_hp, 0.25);
                outcome.description = "The curse lashes out.".to_string();
            }
        }
        (EventKind::CursedChest, _) => {
            outcome.description = "You leave the chest to its whispering.".to_string();
        }
        (EventKind::Merchant, 0) => {
            outcome.gold_delta = -30;
            outcome.hp_delta = hp_fraction_amount(max_hp, 0.25);
            outcome.description = "The tonic is bitter but effective.".to_string();
        }
        (EventKind::Merchant, _) => {
            outcome.description = "The peddler shrugs and moves on.".to_string();
        }
        (EventKind::WanderingSage, 0) => {
            outcome.wisdom_gained = 1 + player_level / 5;
            outcome.description = "The sage shares a fragment of insight.".to_string();
        }
        (EventKind::WanderingSage, _) => {
            outcome.xp_gained = 15 * player_level as u64;
            outcome.description = "A short lesson, well taught.".to_string();
        }
        (EventKind::AncientForge, 0) => {
            outcome.shield_granted = true;
            outcome.description = "The forge flares once and hardens your gear.".to_string();
        }
        (EventKind::AncientForge, _) => {
            outcome.gold_delta = 10 + 3 * level;
            outcome.description = "You pry loose a few sellable fittings.".to_string();
        }
        (EventKind::GamblingImp, 0) => {
            if rng.gen::<f64>() > 0.5 {
                outcome.gold_delta = 40 + 5 * level;
                outcome.description = "The imp scowls and pays up.".to_string();
            } else {
                outcome.gold_delta = -(20 + 5 * level);
                outcome.description = "The dice were loaded. Of course they were.".to_string();
            }
        }
        (EventKind::GamblingImp, _) => {
            outcome.description = "The imp vanishes in a huff of sulfur.".to_string();
        }
    }

    outcome
}

/// `ceil` of a fraction of max HP, as a positive delta magnitude.
fn hp_fraction_amount(max_hp: u32, fraction: f64) -> i32 {
    (max_hp as f64 * fraction).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    #[test]
    fn test_trigger_rate_is_roughly_thirty_percent() {
        let mut rng = rng();
        let trials = 20000;
        let mut triggered = 0;
        for _ in 0..trials {
            if roll_for_event(100.0, &mut rng).is_some() {
                triggered += 1;
            }
        }
        assert!(
            triggered > 5400 && triggered < 6600,
            "expected ~30% triggers, got {triggered}/{trials}"
        );
    }

    #[test]
    fn test_all_events_reachable_at_mid_hp() {
        let mut rng = rng();
        let mut seen = HashMap::new();
        for _ in 0..5000 {
            if let Some(event) = roll_for_event(65.0, &mut rng) {
                *seen.entry(event.kind).or_insert(0u32) += 1;
            }
        }
        assert_eq!(seen.len(), 8, "all 8 kinds should appear: {seen:?}");
    }

    #[test]
    fn test_low_hp_favors_rest_camp() {
        let mut rng = rng();
        let trials = 20000;
        let mut low_hp_camps = 0;
        let mut high_hp_camps = 0;
        for _ in 0..trials {
            if let Some(e) = roll_for_event(30.0, &mut rng) {
                if e.kind == EventKind::RestCamp {
                    low_hp_camps += 1;
                }
            }
            if let Some(e) = roll_for_event(100.0, &mut rng) {
                if e.kind == EventKind::RestCamp {
                    high_hp_camps += 1;
                }
            }
        }
        assert!(
            low_hp_camps > high_hp_camps * 3 / 2,
            "rest camp should spike at low HP: low={low_hp_camps}, high={high_hp_camps}"
        );
    }

    #[test]
    fn test_critical_hp_suppresses_cursed_chest() {
        let mut rng = rng();
        let trials = 20000;
        let mut critical_chests = 0;
        let mut healthy_chests = 0;
        for _ in 0..trials {
            if let Some(e) = roll_for_event(20.0, &mut rng) {
                if e.kind == EventKind::CursedChest {
                    critical_chests += 1;
                }
            }
            if let Some(e) = roll_for_event(65.0, &mut rng) {
                if e.kind == EventKind::CursedChest {
                    healthy_chests += 1;
                }
            }
        }
        assert!(
            critical_chests * 2 < healthy_chests,
            "cursed chest should be rare at critical HP: critical={critical_chests}, healthy={healthy_chests}"
        );
    }

    #[test]
    fn test_treasure_room_safe_choice_scales_with_level() {
        let event = RandomEvent::new(EventKind::TreasureRoom);
        let outcome = resolve_event_choice(&event, 0, 10, 100, &mut rng());
        assert_eq!(outcome.gold_delta, 70);
        assert_eq!(outcome.hp_delta, 0);
    }

    #[test]
    fn test_treasure_room_risky_choice_both_branches() {
        let event = RandomEvent::new(EventKind::TreasureRoom);
        let mut rng = rng();
        let mut won = false;
        let mut lost = false;
        for _ in 0..200 {
            let outcome = resolve_event_choice(&event, 1, 4, 100, &mut rng);
            if outcome.gold_delta > 0 {
                assert_eq!(outcome.gold_delta, 90);
                won = true;
            } else {
                // ceil(100 * 0.15) = 15
                assert_eq!(outcome.hp_delta, -15);
                lost = true;
            }
        }
        assert!(won && lost, "both risky branches should occur");
    }

    #[test]
    fn test_shrine_heal_uses_ceil() {
        let event = RandomEvent::new(EventKind::Shrine);
        // ceil(55 * 0.30) = ceil(16.5) = 17
        let outcome = resolve_event_choice(&event, 0, 1, 55, &mut rng());
        assert_eq!(outcome.hp_delta, 17);
    }

    #[test]
    fn test_shrine_offer_grants_evolution_boost() {
        let event = RandomEvent::new(EventKind::Shrine);
        let outcome = resolve_event_choice(&event, 1, 1, 100, &mut rng());
        assert!(outcome.evolution_boost);
        assert_eq!(outcome.hp_delta, 0);
    }

    #[test]
    fn test_rest_camp_choices() {
        let event = RandomEvent::new(EventKind::RestCamp);
        let deep = resolve_event_choice(&event, 0, 1, 100, &mut rng());
        assert_eq!(deep.hp_delta, 40);
        assert!(!deep.shield_granted);

        let light = resolve_event_choice(&event, 1, 1, 100, &mut rng());
        assert_eq!(light.hp_delta, 15);
        assert!(light.shield_granted);
    }

    #[test]
    fn test_cursed_chest_walk_away_is_safe() {
        let event = RandomEvent::new(EventKind::CursedChest);
        let mut rng = rng();
        for _ in 0..50 {
            let outcome = resolve_event_choice(&event, 1, 5, 100, &mut rng);
            assert_eq!(outcome.gold_delta, 0);
            assert_eq!(outcome.hp_delta, 0);
            assert_eq!(outcome.xp_gained, 0);
            assert!(!outcome.shield_granted && !outcome.evolution_boost);
        }
    }

    #[test]
    fn test_cursed_chest_open_splits() {
        let event = RandomEvent::new(EventKind::CursedChest);
        let mut rng = rng();
        let mut treasure = false;
        let mut cursed = false;
        for _ in 0..200 {
            let outcome = resolve_event_choice(&event, 0, 2, 80, &mut rng);
            if outcome.gold_delta > 0 {
                assert_eq!(outcome.gold_delta, 110);
                treasure = true;
            } else {
                assert_eq!(outcome.hp_delta, -20);
                cursed = true;
            }
        }
        assert!(treasure && cursed);
    }

    #[test]
    fn test_merchant_tonic_costs_gold() {
        let event = RandomEvent::new(EventKind::Merchant);
        let outcome = resolve_event_choice(&event, 0, 3, 100, &mut rng());
        assert_eq!(outcome.gold_delta, -30);
        assert_eq!(outcome.hp_delta, 25);
    }

    #[test]
    fn test_sage_choices() {
        let event = RandomEvent::new(EventKind::WanderingSage);
        let wisdom = resolve_event_choice(&event, 0, 12, 100, &mut rng());
        assert_eq!(wisdom.wisdom_gained, 3);

        let lesson = resolve_event_choice(&event, 1, 12, 100, &mut rng());
        assert_eq!(lesson.xp_gained, 180);
    }

    #[test]
    fn test_gambling_imp_wager_both_branches() {
        let event = RandomEvent::new(EventKind::GamblingImp);
        let mut rng = rng();
        let mut wins = 0;
        let mut losses = 0;
        for _ in 0..500 {
            let outcome = resolve_event_choice(&event, 0, 4, 100, &mut rng);
            match outcome.gold_delta {
                60 => wins += 1,
                -40 => losses += 1,
                other => panic!("unexpected wager delta {other}"),
            }
        }
        assert!(wins > 0 && losses > 0);
    }

    #[test]
    fn test_out_of_range_choice_clamps_to_last() {
        let event = RandomEvent::new(EventKind::Merchant);
        let clamped = resolve_event_choice(&event, 99, 3, 100, &mut rng());
        let last = resolve_event_choice(&event, 1, 3, 100, &mut rng());
        assert_eq!(clamped, last);
    }
}
