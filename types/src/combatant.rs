//! Combatant identity and cross-match statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Performance metrics for one combatant over one analyzed match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    /// Cumulative attributed damage, in percent-of-a-health-bar units.
    /// Can exceed 100 across a match.
    pub damage_done: i64,
    pub kills: u32,
    pub turns_on_field: u32,
}

/// One roster entry, addressable by species identifier and, once learned,
/// by its in-battle nickname.
///
/// `aliases[0]` is the species identifier from the roster declaration and
/// never changes. `aliases[1]`, when learned from a `switch` event, is the
/// nickname the rest of the transcript refers to the combatant by. A learned
/// nickname is never retracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub aliases: Vec<String>,
    /// Lifetime knockouts, kept equal to the sum over `overall_utility`.
    pub kills: u32,
    /// Reserved counter, unused by current metrics.
    pub support_moves: u32,
    /// Per-match statistics keyed by match identifier.
    pub overall_utility: BTreeMap<String, MatchStats>,
}

impl Combatant {
    pub fn new(species: &str) -> Self {
        Self {
            aliases: vec![species.to_string()],
            kills: 0,
            support_moves: 0,
            overall_utility: BTreeMap::new(),
        }
    }

    pub fn species(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or("")
    }

    pub fn nickname(&self) -> Option<&str> {
        self.aliases.get(1).map(String::as_str)
    }

    pub fn matches_played(&self) -> usize {
        self.overall_utility.len()
    }

    pub fn total_damage(&self) -> i64 {
        self.overall_utility.values().map(|s| s.damage_done).sum()
    }

    pub fn total_kills(&self) -> u32 {
        self.overall_utility.values().map(|s| s.kills).sum()
    }

    pub fn total_turns(&self) -> u32 {
        self.overall_utility.values().map(|s| s.turns_on_field).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_combatant_is_zeroed() {
        let c = Combatant::new("Pikachu");
        assert_eq!(c.species(), "Pikachu");
        assert_eq!(c.nickname(), None);
        assert_eq!(c.kills, 0);
        assert_eq!(c.matches_played(), 0);
    }

    #[test]
    fn test_totals_sum_over_matches() {
        let mut c = Combatant::new("Pikachu");
        c.overall_utility.insert(
            "gen9ou-1".into(),
            MatchStats {
                damage_done: 100,
                kills: 1,
                turns_on_field: 2,
            },
        );
        c.overall_utility.insert(
            "gen9ou-2".into(),
            MatchStats {
                damage_done: 55,
                kills: 0,
                turns_on_field: 4,
            },
        );
        assert_eq!(c.total_damage(), 155);
        assert_eq!(c.total_kills(), 1);
        assert_eq!(c.total_turns(), 6);
    }

    #[test]
    fn test_serializes_with_legacy_field_names() {
        let mut c = Combatant::new("Pikachu");
        c.overall_utility
            .insert("gen9ou-1".into(), MatchStats::default());
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"overallUtility\""));
        assert!(json.contains("\"damageDone\""));
        assert!(json.contains("\"turnsOnField\""));
        assert!(json.contains("\"supportMoves\""));
    }
}
