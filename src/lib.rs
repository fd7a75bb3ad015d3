//! Lorecrawl - Combat & Progression Resolution Engine
//!
//! Turns flashcard recall quality into RPG outcomes: damage, loot, card
//! evolution, boss phases and multi-floor dungeon runs. Every
//! probabilistic function takes its random source as an argument, so a
//! seeded generator makes the whole engine deterministic and replayable.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod boss;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod events;
pub mod evolution;
pub mod loot;
pub mod modes;
pub mod progression;
pub mod simulator;
