//! Participant and roster-declaration extraction.

use crate::error::AnalysisError;
use crate::tags::{EventKind, kind_of};
use ringside_types::{LogEvent, species_of};

pub const SIDES: [&str; 2] = ["p1", "p2"];

/// The two player display names declared in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    pub p1: String,
    pub p2: String,
}

/// Extract both player declarations, or fail the transcript.
///
/// A transcript without both `player` events is malformed and must be
/// skipped without touching the roster.
pub fn find_players(events: &[LogEvent]) -> Result<Participants, AnalysisError> {
    let missing = |side: &str| AnalysisError::MissingPlayers {
        side: side.to_string(),
    };
    Ok(Participants {
        p1: find_player(events, "p1").ok_or_else(|| missing("p1"))?,
        p2: find_player(events, "p2").ok_or_else(|| missing("p2"))?,
    })
}

fn find_player(events: &[LogEvent], side: &str) -> Option<String> {
    events
        .iter()
        .find(|e| kind_of(e) == EventKind::Player && e.field(2) == Some(side))
        .and_then(|e| e.field(3))
        .map(str::to_string)
}

/// Species identifiers declared for a side via `poke` events, in order,
/// without duplicates.
pub fn declared_species(events: &[LogEvent], side: &str) -> Vec<String> {
    let mut species = Vec::new();
    for event in events {
        if kind_of(event) != EventKind::Poke || event.field(2) != Some(side) {
            continue;
        }
        let Some(details) = event.field(3) else {
            continue;
        };
        let id = species_of(details);
        if !id.is_empty() && !species.iter().any(|s| s == id) {
            species.push(id.to_string());
        }
    }
    species
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_find_players() {
        let events = tokenize("|player|p1|Alice\n|player|p2|Bob\n|start");
        let participants = find_players(&events).unwrap();
        assert_eq!(participants.p1, "Alice");
        assert_eq!(participants.p2, "Bob");
    }

    #[test]
    fn test_missing_side_fails() {
        let events = tokenize("|player|p1|Alice\n|start");
        let err = find_players(&events).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingPlayers { side } if side == "p2"));
    }

    #[test]
    fn test_declared_species_strips_details_and_dedupes() {
        let events = tokenize(
            "|poke|p1|Pikachu, L50, M|\n|poke|p1|Snorlax, M|\n|poke|p1|Pikachu, L50, M|\n|poke|p2|Charmander|",
        );
        assert_eq!(declared_species(&events, "p1"), vec!["Pikachu", "Snorlax"]);
        assert_eq!(declared_species(&events, "p2"), vec!["Charmander"]);
    }
}
