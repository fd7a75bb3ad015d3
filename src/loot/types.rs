use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Amulet,
    Ring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
        }
    }
}

/// Non-numeric perk carried by higher-rarity gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Reveals an extra hint on boss fights
    HintGlow,
    /// Adds seconds to the answer timer
    TimeExtension,
    XpBoost,
    GoldMagnet,
    /// One free retry on a Wrong answer per encounter
    SecondChance,
}

/// A loot item. Ids are drawn from the rng stream so seeded replays
/// reproduce them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
    pub hp_bonus: u32,
    pub special: Option<SpecialEffect>,
}

/// Cosmetic/stat-flavor tag awarded to a card after a sustained streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardVariant {
    Foil,
    Golden,
    Prismatic,
}

/// Blueprint an awarded item is stamped from.
#[derive(Debug, Clone, Copy)]
pub struct EquipmentTemplate {
    pub name: &'static str,
    pub slot: EquipmentSlot,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
    pub hp_bonus: u32,
    pub special: Option<SpecialEffect>,
}

const COMMON_TEMPLATES: [EquipmentTemplate; 5] = [
    EquipmentTemplate {
        name: "Worn Quill",
        slot: EquipmentSlot::Weapon,
        attack_bonus: 2,
        defense_bonus: 0,
        hp_bonus: 0,
        special: None,
    },
    EquipmentTemplate {
        name: "Patched Satchel",
        slot: EquipmentSlot::Armor,
        attack_bonus: 0,
        defense_bonus: 2,
        hp_bonus: 0,
        special: None,
    },
    EquipmentTemplate {
        name: "Linen Cap",
        slot: EquipmentSlot::Helmet,
        attack_bonus: 0,
        defense_bonus: 1,
        hp_bonus: 5,
        special: None,
    },
    EquipmentTemplate {
        name: "Wooden Bead Amulet",
        slot: EquipmentSlot::Amulet,
        attack_bonus: 1,
        defense_bonus: 1,
        hp_bonus: 0,
        special: None,
    },
    EquipmentTemplate {
        name: "Copper Band",
        slot: EquipmentSlot::Ring,
        attack_bonus: 1,
        defense_bonus: 0,
        hp_bonus: 3,
        special: None,
    },
];

const UNCOMMON_TEMPLATES: [EquipmentTemplate; 4] = [
    EquipmentTemplate {
        name: "Inked Stylus",
        slot: EquipmentSlot::Weapon,
        attack_bonus: 4,
        defense_bonus: 0,
        hp_bonus: 0,
        special: None,
    },
    EquipmentTemplate {
        name: "Scribe's Vest",
        slot: EquipmentSlot::Armor,
        attack_bonus: 0,
        defense_bonus: 4,
        hp_bonus: 5,
        special: None,
    },
    EquipmentTemplate {
        name: "Scholar's Hood",
        slot: EquipmentSlot::Helmet,
        attack_bonus: 1,
        defense_bonus: 2,
        hp_bonus: 8,
        special: None,
    },
    EquipmentTemplate {
        name: "Silver Locket",
        slot: EquipmentSlot::Amulet,
        attack_bonus: 2,
        defense_bonus: 2,
        hp_bonus: 5,
        special: Some(SpecialEffect::GoldMagnet),
    },
];

const RARE_TEMPLATES: [EquipmentTemplate; 4] = [
    EquipmentTemplate {
        name: "Runed Blade-Pen",
        slot: EquipmentSlot::Weapon,
        attack_bonus: 7,
        defense_bonus: 0,
        hp_bonus: 0,
        special: Some(SpecialEffect::XpBoost),
    },
    EquipmentTemplate {
        name: "Tome-Bound Plate",
        slot: EquipmentSlot::Armor,
        attack_bonus: 0,
        defense_bonus: 7,
        hp_bonus: 10,
        special: None,
    },
    EquipmentTemplate {
        name: "Circlet of Focus",
        slot: EquipmentSlot::Helmet,
        attack_bonus: 2,
        defense_bonus: 3,
        hp_bonus: 12,
        special: Some(SpecialEffect::TimeExtension),
    },
    EquipmentTemplate {
        name: "Signet of Recall",
        slot: EquipmentSlot::Ring,
        attack_bonus: 4,
        defense_bonus: 2,
        hp_bonus: 8,
        special: Some(SpecialEffect::HintGlow),
    },
];

const EPIC_TEMPLATES: [EquipmentTemplate; 3] = [
    EquipmentTemplate {
        name: "Lexicon Edge",
        slot: EquipmentSlot::Weapon,
        attack_bonus: 12,
        defense_bonus: 0,
        hp_bonus: 10,
        special: Some(SpecialEffect::XpBoost),
    },
    EquipmentTemplate {
        name: "Aegis of the Archivist",
        slot: EquipmentSlot::Armor,
        attack_bonus: 2,
        defense_bonus: 12,
        hp_bonus: 20,
        special: Some(SpecialEffect::SecondChance),
    },
    EquipmentTemplate {
        name: "Mnemonic Crown",
        slot: EquipmentSlot::Helmet,
        attack_bonus: 5,
        defense_bonus: 6,
        hp_bonus: 25,
        special: Some(SpecialEffect::HintGlow),
    },
];

/// Template pool for a rarity. Never empty.
pub fn templates_for_rarity(rarity: Rarity) -> &'static [EquipmentTemplate] {
    match rarity {
        Rarity::Common => &COMMON_TEMPLATES,
        Rarity::Uncommon => &UNCOMMON_TEMPLATES,
        Rarity::Rare => &RARE_TEMPLATES,
        Rarity::Epic => &EPIC_TEMPLATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_pools_never_empty() {
        for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic] {
            assert!(!templates_for_rarity(rarity).is_empty());
        }
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
    }

    #[test]
    fn test_epic_templates_carry_specials() {
        for template in templates_for_rarity(Rarity::Epic) {
            assert!(template.special.is_some());
        }
    }
}
