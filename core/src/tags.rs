//! Static classification of the consumed event tag vocabulary.

use phf::phf_map;
use ringside_types::LogEvent;

/// The event classes the engine interprets. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Player,
    Poke,
    Switch,
    Move,
    Damage,
    Heal,
    Turn,
    Start,
    Win,
    Other,
}

static TAG_KINDS: phf::Map<&'static str, EventKind> = phf_map! {
    "player" => EventKind::Player,
    "poke" => EventKind::Poke,
    "switch" => EventKind::Switch,
    // Forced switches carry the same payload layout as voluntary ones.
    "drag" => EventKind::Switch,
    "move" => EventKind::Move,
    "-damage" => EventKind::Damage,
    "-heal" => EventKind::Heal,
    "turn" => EventKind::Turn,
    "start" => EventKind::Start,
    "win" => EventKind::Win,
};

pub fn kind_of(event: &LogEvent) -> EventKind {
    TAG_KINDS
        .get(event.tag())
        .copied()
        .unwrap_or(EventKind::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        let damage = LogEvent::from_line(1, "|-damage|p2a: Charmy|40/100");
        assert_eq!(kind_of(&damage), EventKind::Damage);
        let drag = LogEvent::from_line(2, "|drag|p1a: Sparky|Pikachu|100/100");
        assert_eq!(kind_of(&drag), EventKind::Switch);
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let event = LogEvent::from_line(1, "|upkeep");
        assert_eq!(kind_of(&event), EventKind::Other);
    }
}
