pub mod logic;
pub mod types;

pub use logic::{resolve_event_choice, roll_for_event};
pub use types::{EventChoice, EventKind, EventOutcome, RandomEvent};
