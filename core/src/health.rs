//! Backward health lookup over an immutable event prefix.

use crate::tags::{EventKind, kind_of};
use ringside_types::{HealthReading, LogEvent, split_slot};

/// Last known health of `identity` before `events[before]`.
///
/// Walks the prefix backward for the most recent `-damage`, `-heal` or
/// switch event naming the identity; defaults to the battle-start baseline
/// of 100 when nothing qualifies. Absence of data is not an error. The
/// scan never mutates the event sequence, so interleaved scans over the
/// same transcript are safe.
pub fn last_known_health(events: &[LogEvent], before: usize, identity: &str) -> HealthReading {
    let upper = before.min(events.len());
    for event in events[..upper].iter().rev() {
        // Switch events state the slot's health one field later than
        // damage/heal events do.
        let health_field = match kind_of(event) {
            EventKind::Damage | EventKind::Heal => 3,
            EventKind::Switch => 4,
            _ => continue,
        };
        let Some(subject) = event.subject() else {
            continue;
        };
        if !subject_matches(subject, identity) {
            continue;
        }
        if let Some(reading) = event.field(health_field).and_then(HealthReading::parse) {
            return reading;
        }
    }
    HealthReading::FULL
}

/// Tokenized identity comparison for event subjects.
///
/// Identities are full slot tokens (`"p2a: Charmy"`) or, for unresolved
/// spread targets, bare slot positions (`"p2a"`), which match on the
/// position part alone.
pub fn subject_matches(subject: &str, identity: &str) -> bool {
    if subject == identity {
        return true;
    }
    if !identity.contains(':')
        && let Some((position, _)) = split_slot(subject)
    {
        return position == identity;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_defaults_to_full_health() {
        let events = tokenize("|start\n|turn|1");
        assert_eq!(
            last_known_health(&events, events.len(), "p1a: Sparky"),
            HealthReading::FULL
        );
    }

    #[test]
    fn test_reads_switch_fraction() {
        let events = tokenize("|switch|p1a: Sparky|Pikachu, L50|75/100\n|turn|1");
        let reading = last_known_health(&events, events.len(), "p1a: Sparky");
        assert_eq!(reading.value, 75);
        assert!(!reading.fainted);
    }

    #[test]
    fn test_most_recent_reading_wins() {
        let events = tokenize(
            "|switch|p2a: Charmy|Charmander|100/100\n|-damage|p2a: Charmy|40/100\n|-heal|p2a: Charmy|65/100",
        );
        assert_eq!(last_known_health(&events, events.len(), "p2a: Charmy").value, 65);
        // Bounded prefix excludes the heal.
        assert_eq!(last_known_health(&events, 2, "p2a: Charmy").value, 40);
    }

    #[test]
    fn test_bare_slot_identity() {
        let events = tokenize("|-damage|p2a: Charmy|40/100");
        assert_eq!(last_known_health(&events, 1, "p2a").value, 40);
        assert_eq!(last_known_health(&events, 1, "p2b").value, 100);
    }

    #[test]
    fn test_other_events_do_not_qualify() {
        let events = tokenize("|move|p1a: Sparky|Thunderbolt|p2a: Charmy");
        assert_eq!(
            last_known_health(&events, 1, "p1a: Sparky"),
            HealthReading::FULL
        );
    }
}
