//! Nickname resolution for roster combatants.

use crate::tags::{EventKind, kind_of};
use ringside_types::{LogEvent, slot_side, species_of, split_slot};

/// Learn the in-battle nickname for a species from the first `switch` (or
/// `drag`) event on its side that names the species.
///
/// Returns `None` when the combatant never entered play; it stays
/// addressable by species only, and nickname-keyed matching will simply
/// leave its stats at zero.
pub fn resolve_nickname(events: &[LogEvent], side: &str, species: &str) -> Option<String> {
    events.iter().find_map(|event| {
        if kind_of(event) != EventKind::Switch {
            return None;
        }
        let (position, nickname) = split_slot(event.subject()?)?;
        if slot_side(position) != side {
            return None;
        }
        if species_of(event.field(3)?) != species {
            return None;
        }
        Some(nickname.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_resolves_first_switch() {
        let events = tokenize(
            "|start\n|switch|p1a: Sparky|Pikachu, L50, M|100/100\n|switch|p1a: Sparky|Pikachu, L50, M|60/100",
        );
        assert_eq!(
            resolve_nickname(&events, "p1", "Pikachu"),
            Some("Sparky".to_string())
        );
    }

    #[test]
    fn test_side_filter() {
        // Same species on both sides must not cross-resolve.
        let events = tokenize(
            "|switch|p1a: Mine|Pikachu|100/100\n|switch|p2a: Yours|Pikachu|100/100",
        );
        assert_eq!(
            resolve_nickname(&events, "p2", "Pikachu"),
            Some("Yours".to_string())
        );
    }

    #[test]
    fn test_drag_counts_as_switch() {
        let events = tokenize("|drag|p2a: Roar Victim|Snorlax, M|95/100");
        assert_eq!(
            resolve_nickname(&events, "p2", "Snorlax"),
            Some("Roar Victim".to_string())
        );
    }

    #[test]
    fn test_never_switched_in() {
        let events = tokenize("|poke|p1|Pikachu|\n|start\n|turn|1");
        assert_eq!(resolve_nickname(&events, "p1", "Pikachu"), None);
    }
}
