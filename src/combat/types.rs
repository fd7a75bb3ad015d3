use crate::core::constants::COMBAT_LOG_CAPACITY;
use crate::core::types::AnswerQuality;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Enemy rank, driving loot odds and boss-phase eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyTier {
    Minion,
    Common,
    Elite,
    Boss,
}

impl EnemyTier {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyTier::Minion => "Minion",
            EnemyTier::Common => "Common",
            EnemyTier::Elite => "Elite",
            EnemyTier::Boss => "Boss",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub tier: EnemyTier,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub xp_reward: u64,
    pub gold_reward: u64,
}

impl Enemy {
    pub fn new(
        name: String,
        tier: EnemyTier,
        max_hp: u32,
        attack: u32,
        xp_reward: u64,
        gold_reward: u64,
    ) -> Self {
        Self {
            name,
            tier,
            current_hp: max_hp,
            max_hp,
            attack,
            xp_reward,
            gold_reward,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Current HP as a fraction of max, for boss-phase lookups.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.current_hp as f64 / self.max_hp as f64
    }
}

/// What happened on one combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    PlayerHit,
    PlayerCrit,
    EnemyHit,
    PoisonTick,
}

/// Outcome of one resolved turn. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    pub action: TurnAction,
    pub damage: u32,
    pub description: String,
}

/// Per-quality answer counts accumulated over one encounter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityTally {
    pub perfect: u32,
    pub correct: u32,
    pub partial: u32,
    pub wrong: u32,
    pub timeout: u32,
}

impl QualityTally {
    pub fn record(&mut self, quality: AnswerQuality) {
        match quality {
            AnswerQuality::Perfect => self.perfect += 1,
            AnswerQuality::Correct => self.correct += 1,
            AnswerQuality::Partial => self.partial += 1,
            AnswerQuality::Wrong => self.wrong += 1,
            AnswerQuality::Timeout => self.timeout += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.perfect + self.correct + self.partial + self.wrong + self.timeout
    }
}

/// State of one encounter. Created per encounter, mutated once per turn,
/// discarded when terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatState {
    pub enemy: Enemy,
    pub player_current_hp: u32,
    pub player_max_hp: u32,
    /// Damage armed by a Timeout, applied at the start of the next turn.
    pub poison_damage: u32,
    pub cards_answered: u32,
    pub tally: QualityTally,
    #[serde(skip)]
    pub combat_log: VecDeque<String>,
}

impl CombatState {
    pub fn new(enemy: Enemy, player_hp: u32, player_max_hp: u32) -> Self {
        Self {
            enemy,
            player_current_hp: player_hp.min(player_max_hp),
            player_max_hp,
            poison_damage: 0,
            cards_answered: 0,
            tally: QualityTally::default(),
            combat_log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_current_hp > 0
    }

    pub fn add_log_entry(&mut self, message: String) {
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.combat_log.push_back(message);
    }
}
