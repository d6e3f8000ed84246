pub mod combatant;
pub mod event;
pub mod formatting;

pub use combatant::{Combatant, MatchStats};
pub use event::{HealthReading, LogEvent, slot_side, species_of, split_slot};
