pub mod logic;
pub mod types;

pub use logic::{combat_outcome, combat_rewards, resolve_turn, CombatOutcome, TurnInput};
pub use types::{CombatState, Enemy, EnemyTier, QualityTally, TurnAction, TurnEvent};
