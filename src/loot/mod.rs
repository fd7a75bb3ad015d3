pub mod drops;
pub mod types;

pub use drops::{drop_rates_for_tier, rarity_for_roll, roll_loot, try_award_variant};
pub use types::{CardVariant, Equipment, EquipmentSlot, Rarity, SpecialEffect};
