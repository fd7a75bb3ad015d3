// Evolution tiers
pub const MAX_EVOLUTION_TIER: u8 = 3;
pub const TIER_PROMOTION_STREAK: u32 = 3;
pub const TIER_2_MIN_STABILITY: f64 = 10.0;
pub const TIER_3_MIN_STABILITY: f64 = 30.0;

// Tier damage multipliers, indexed by tier 0-3
pub const TIER_DAMAGE_MULTIPLIERS: [f64; 4] = [1.0, 1.25, 1.5, 2.0];
// Tier crit bonus in percentage points, indexed by tier 0-3
pub const TIER_CRIT_BONUSES: [u32; 4] = [0, 0, 10, 25];

// Card health classification
pub const LEECH_LAPSE_THRESHOLD: u32 = 5;
pub const STRUGGLING_WINDOW: usize = 5;
pub const STRUGGLING_FAILURE_THRESHOLD: usize = 3;

// Retrieval mode selection
pub const MODE_RECENCY_PENALTY: f64 = 0.3;
pub const MODE_VARIETY_WINDOW: usize = 3;

// Combat damage multipliers by answer quality
pub const PERFECT_DAMAGE_MULTIPLIER: f64 = 2.0;
pub const PERFECT_CRIT_DAMAGE_MULTIPLIER: f64 = 2.5;
pub const CORRECT_DAMAGE_MULTIPLIER: f64 = 1.0;
pub const PARTIAL_DAMAGE_MULTIPLIER: f64 = 0.5;
pub const MIN_ENEMY_DAMAGE: u32 = 1;
pub const TIMEOUT_POISON_DAMAGE: u32 = 5;
pub const COMBAT_LOG_CAPACITY: usize = 10;

// Combat reward derivation (per-quality XP weights)
pub const XP_PER_PERFECT: u64 = 5;
pub const XP_PER_CORRECT: u64 = 3;
pub const XP_PER_PARTIAL: u64 = 1;

// XP level curve: xp_for_level = XP_CURVE_BASE * level^XP_CURVE_EXPONENT
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Loot drop bands: (none, common, uncommon, rare, epic), sum = 1.0
pub const DROP_RATE_NONE: f64 = 0.40;
pub const DROP_RATE_COMMON: f64 = 0.35;
pub const DROP_RATE_UNCOMMON: f64 = 0.18;
pub const DROP_RATE_RARE: f64 = 0.06;
pub const DROP_RATE_EPIC: f64 = 0.01;

// Tier adjustments shift weight out of the `none` band
pub const ELITE_RARE_SHIFT: f64 = 0.02;
pub const ELITE_EPIC_SHIFT: f64 = 0.005;
pub const BOSS_RARE_SHIFT: f64 = 0.05;
pub const BOSS_EPIC_SHIFT: f64 = 0.02;

// Card variant award: ordered bands walked prismatic -> golden -> foil
pub const VARIANT_MIN_STREAK: u32 = 5;
pub const VARIANT_PRISMATIC_CHANCE: f64 = 0.001;
pub const VARIANT_GOLDEN_CHANCE: f64 = 0.009;
pub const VARIANT_FOIL_CHANCE: f64 = 0.04;

// Boss phase thresholds, strictly descending
pub const PHASE_AWAKENING_THRESHOLD: f64 = 1.0;
pub const PHASE_FURY_THRESHOLD: f64 = 0.6;
pub const PHASE_ENRAGE_THRESHOLD: f64 = 0.3;
pub const PHASE_FURY_DAMAGE_MULT: f64 = 1.5;
pub const PHASE_FURY_XP_MULT: f64 = 1.25;
pub const PHASE_ENRAGE_DAMAGE_MULT: f64 = 2.0;
pub const PHASE_ENRAGE_XP_MULT: f64 = 2.0;
pub const PHASE_ENRAGE_TIMER_PENALTY_SECONDS: u32 = 5;

// Random events
pub const EVENT_TRIGGER_CHANCE: f64 = 0.30;
pub const EVENT_LOW_HP_PERCENT: f64 = 50.0;
pub const EVENT_HIGH_HP_PERCENT: f64 = 80.0;
pub const EVENT_CRITICAL_HP_PERCENT: f64 = 30.0;
pub const REST_CAMP_LOW_HP_WEIGHT: f64 = 2.5;
pub const SHRINE_HIGH_HP_WEIGHT: f64 = 1.5;
pub const CURSED_CHEST_CRITICAL_HP_WEIGHT: f64 = 0.3;

// Dungeon runs
pub const DUNGEON_FLOORS: u32 = 5;
pub const DUNGEON_FLOORS_EXTENDED: u32 = 8;
pub const FLOOR_HP_SCALING_STEP: f64 = 0.3;
pub const FLOOR_REWARD_SCALING_STEP: f64 = 0.25;
pub const BOSS_FLOOR_HP_BONUS: f64 = 1.5;
pub const BOSS_FLOOR_REWARD_BONUS: f64 = 1.5;
pub const RUN_COMPLETED_MULTIPLIER: f64 = 2.0;
pub const RUN_DEFEATED_MULTIPLIER: f64 = 0.5;
pub const RUN_RETREATED_MULTIPLIER: f64 = 1.0;
