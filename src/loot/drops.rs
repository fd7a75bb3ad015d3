//! Loot and variant rolls.
//!
//! Both tables are ordered sequences walked against a single draw; the
//! iteration order is part of the semantics, so neither is a map.

use super::types::{templates_for_rarity, CardVariant, Equipment, Rarity};
use crate::combat::types::EnemyTier;
use crate::core::constants::*;
use rand::Rng;

/// Drop bands for an enemy tier, in walk order:
/// none, common, uncommon, rare, epic. Always sums to 1.0 - tier
/// adjustments move weight out of `none` into rare/epic.
pub fn drop_rates_for_tier(tier: EnemyTier) -> [f64; 5] {
    let mut bands = [
        DROP_RATE_NONE,
        DROP_RATE_COMMON,
        DROP_RATE_UNCOMMON,
        DROP_RATE_RARE,
        DROP_RATE_EPIC,
    ];
    match tier {
        EnemyTier::Minion | EnemyTier::Common => {}
        EnemyTier::Elite => {
            bands[0] -= ELITE_RARE_SHIFT + ELITE_EPIC_SHIFT;
            bands[3] += ELITE_RARE_SHIFT;
            bands[4] += ELITE_EPIC_SHIFT;
        }
        EnemyTier::Boss => {
            bands[0] -= BOSS_RARE_SHIFT + BOSS_EPIC_SHIFT;
            bands[3] += BOSS_RARE_SHIFT;
            bands[4] += BOSS_EPIC_SHIFT;
        }
    }
    bands
}

/// Maps a raw roll in [0,1) to a rarity for the given tier. `None`
/// means no drop. Epic is the remainder band, so float dust at the top
/// of the range still lands somewhere.
pub fn rarity_for_roll(roll: f64, tier: EnemyTier) -> Option<Rarity> {
    let bands = drop_rates_for_tier(tier);
    let mut threshold = bands[0];
    if roll < threshold {
        return None;
    }
    threshold += bands[1];
    if roll < threshold {
        return Some(Rarity::Common);
    }
    threshold += bands[2];
    if roll < threshold {
        return Some(Rarity::Uncommon);
    }
    threshold += bands[3];
    if roll < threshold {
        return Some(Rarity::Rare);
    }
    Some(Rarity::Epic)
}

/// Rolls the loot table for a defeated enemy.
///
/// One draw decides the rarity band; on a hit, a template is drawn
/// uniformly from that rarity's pool and stamped with a fresh id from
/// the rng stream.
pub fn roll_loot(enemy_tier: EnemyTier, rng: &mut impl Rng) -> Option<Equipment> {
    let rarity = rarity_for_roll(rng.gen::<f64>(), enemy_tier)?;

    let pool = templates_for_rarity(rarity);
    let template = pool[rng.gen_range(0..pool.len())];

    Some(Equipment {
        id: next_item_id(rng),
        name: template.name.to_string(),
        slot: template.slot,
        rarity,
        attack_bonus: template.attack_bonus,
        defense_bonus: template.defense_bonus,
        hp_bonus: template.hp_bonus,
        special: template.special,
    })
}

/// Item ids come from the rng stream, not a clock or uuid, so a seeded
/// replay reproduces them.
fn next_item_id(rng: &mut impl Rng) -> String {
    format!("eq-{:08x}{:08x}", rng.gen::<u32>(), rng.gen::<u32>())
}

/// Tries to attach a variant to a card after a sustained streak.
///
/// A card that already has a variant is never re-rolled. The table is
/// walked prismatic -> golden -> foil; when prismatic is locked its band
/// is removed outright, which shifts the later bands earlier by the
/// removed width. That shift is deliberate and load-bearing.
pub fn try_award_variant(
    consecutive_correct: u32,
    current_variant: Option<CardVariant>,
    rng: &mut impl Rng,
    prismatic_unlocked: bool,
) -> Option<CardVariant> {
    if consecutive_correct < VARIANT_MIN_STREAK || current_variant.is_some() {
        return None;
    }

    let mut table: Vec<(CardVariant, f64)> = Vec::with_capacity(3);
    if prismatic_unlocked {
        table.push((CardVariant::Prismatic, VARIANT_PRISMATIC_CHANCE));
    }
    table.push((CardVariant::Golden, VARIANT_GOLDEN_CHANCE));
    table.push((CardVariant::Foil, VARIANT_FOIL_CHANCE));

    let roll = rng.gen::<f64>();
    let mut threshold = 0.0;
    for (variant, chance) in table {
        threshold += chance;
        if roll < threshold {
            return Some(variant);
        }
    }
    None
}
