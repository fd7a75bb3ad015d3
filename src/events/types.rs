use serde::{Deserialize, Serialize};

/// The eight between-floor encounters. Order matters: the weighted roll
/// in [`super::logic::roll_for_event`] walks this list cumulatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TreasureRoom,
    Shrine,
    RestCamp,
    CursedChest,
    Merchant,
    WanderingSage,
    AncientForge,
    GamblingImp,
}

/// All kinds in roll order.
pub const ALL_EVENT_KINDS: [EventKind; 8] = [
    EventKind::TreasureRoom,
    EventKind::Shrine,
    EventKind::RestCamp,
    EventKind::CursedChest,
    EventKind::Merchant,
    EventKind::WanderingSage,
    EventKind::AncientForge,
    EventKind::GamblingImp,
];

impl EventKind {
    pub fn title(&self) -> &'static str {
        match self {
            EventKind::TreasureRoom => "A Glittering Cache",
            EventKind::Shrine => "Shrine of Memory",
            EventKind::RestCamp => "Abandoned Campfire",
            EventKind::CursedChest => "A Chest, Whispering",
            EventKind::Merchant => "Travelling Peddler",
            EventKind::WanderingSage => "The Wandering Sage",
            EventKind::AncientForge => "Cold Ancient Forge",
            EventKind::GamblingImp => "An Imp With Dice",
        }
    }

    /// The two choices presented for this event, in display order.
    pub fn choices(&self) -> [EventChoice; 2] {
        match self {
            EventKind::TreasureRoom => [
                EventChoice::new("Take the coins in plain sight"),
                EventChoice::new("Reach into the dark crevice"),
            ],
            EventKind::Shrine => [
                EventChoice::new("Pray for vigor"),
                EventChoice::new("Offer a memory"),
            ],
            EventKind::RestCamp => [
                EventChoice::new("Sleep by the embers"),
                EventChoice::new("Keep watch and rest lightly"),
            ],
            EventKind::CursedChest => [
                EventChoice::new("Open it"),
                EventChoice::new("Walk away"),
            ],
            EventKind::Merchant => [
                EventChoice::new("Buy a tonic (30 gold)"),
                EventChoice::new("Decline politely"),
            ],
            EventKind::WanderingSage => [
                EventChoice::new("Ask for wisdom"),
                EventChoice::new("Ask for a lesson"),
            ],
            EventKind::AncientForge => [
                EventChoice::new("Temper your gear"),
                EventChoice::new("Scavenge the scrap"),
            ],
            EventKind::GamblingImp => [
                EventChoice::new("Wager a purse"),
                EventChoice::new("Refuse the game"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChoice {
    pub label: String,
}

impl EventChoice {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

/// An event instance offered to the player between floors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub kind: EventKind,
    pub title: String,
    pub choices: [EventChoice; 2],
}

impl RandomEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            choices: kind.choices(),
        }
    }
}

/// Deltas produced by resolving an event choice. Everything defaults to
/// zero/false so a branch only sets what it touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub gold_delta: i64,
    pub hp_delta: i32,
    pub xp_gained: u64,
    pub wisdom_gained: u32,
    pub shield_granted: bool,
    pub evolution_boost: bool,
    pub description: String,
}
