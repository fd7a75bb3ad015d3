//! Balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of simulated dungeon runs to analyze:
//! - Completion/defeat rates at a given answer accuracy
//! - Gold and XP payout pacing
//! - Loot drop rates by rarity
//! - Event frequency between floors
//!
//! The simulator drives the same resolution functions as real play, so
//! its numbers match what a player at that accuracy would see.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
