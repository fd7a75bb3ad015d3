pub mod logic;
pub mod types;

pub use logic::{
    complete_floor, create_dungeon_run, current_floor_config, final_rewards, record_defeat,
    retreat, scale_enemy_for_floor, should_trigger_event,
};
pub use types::{DungeonRunState, FloorConfig, RunRewards};
