//! Persistent cross-match roster storage.
//!
//! A `Team` must expose the same combatant record under its species
//! identifier and its learned nickname. Rather than aliasing shared
//! pointers, the team is a slab of records plus a key index: both keys map
//! to the same slab slot, so a mutation through one key is visible through
//! the other by construction.

use crate::analyzer::MatchReport;
use hashbrown::HashMap;
use ringside_types::Combatant;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

#[derive(Debug, Clone, Default)]
pub struct Team {
    members: Vec<Combatant>,
    index: HashMap<String, usize>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the combatant declared under a species identifier.
    pub fn insert_species(&mut self, species: &str) -> usize {
        if let Some(&slot) = self.index.get(species) {
            return slot;
        }
        let slot = self.members.len();
        self.members.push(Combatant::new(species));
        self.index.insert(species.to_string(), slot);
        slot
    }

    /// Index an in-battle nickname onto an existing species record.
    ///
    /// The nickname is appended to the record's aliases when new; a
    /// previously learned nickname is never retracted, and the first one
    /// learned stays `aliases[1]`. Returns false when the species is
    /// unknown to this team.
    pub fn register_alias(&mut self, species: &str, nickname: &str) -> bool {
        let Some(&slot) = self.index.get(species) else {
            return false;
        };
        let combatant = &mut self.members[slot];
        if !combatant.aliases.iter().any(|a| a == nickname) {
            combatant.aliases.push(nickname.to_string());
        }
        self.index.entry(nickname.to_string()).or_insert(slot);
        true
    }

    pub fn get(&self, key: &str) -> Option<&Combatant> {
        self.index.get(key).map(|&slot| &self.members[slot])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Combatant> {
        self.index.get(key).map(|&slot| &mut self.members[slot])
    }

    pub(crate) fn member_mut(&mut self, slot: usize) -> &mut Combatant {
        &mut self.members[slot]
    }

    /// The "real" roster entries: one per declared species, without
    /// nickname-keyed duplicates.
    pub fn species_entries(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for combatant in &self.members {
            map.serialize_entry(combatant.species(), combatant)?;
        }
        map.end()
    }
}

/// The session-wide mapping of players to their teams.
///
/// Once a player's team exists it is never recreated; later matches only
/// augment its combatants' per-match records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: HashMap<String, Team>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self, player: &str) -> Option<&Team> {
        self.teams.get(player)
    }

    pub fn team_mut(&mut self, player: &str) -> Option<&mut Team> {
        self.teams.get_mut(player)
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Apply a fully-staged match report in one step.
    ///
    /// Creates teams and combatants that do not exist yet, registers newly
    /// learned nicknames, and writes each combatant's per-match record
    /// under the report's match identifier. Re-merging the same match
    /// overwrites the same keys, so the operation is idempotent. Callers
    /// running concurrent analyses must serialize their merges.
    pub fn merge_report(&mut self, report: &MatchReport) {
        for side in &report.sides {
            let team = self.teams.entry(side.player.clone()).or_default();
            for combatant_report in &side.combatants {
                let slot = team.insert_species(&combatant_report.species);
                if let Some(nickname) = &combatant_report.nickname {
                    team.register_alias(&combatant_report.species, nickname);
                }
                let combatant = team.member_mut(slot);
                combatant
                    .overall_utility
                    .insert(report.match_id.clone(), combatant_report.stats.clone());
                // Lifetime kills are derived, which keeps the merge idempotent.
                combatant.kills = combatant.overall_utility.values().map(|s| s.kills).sum();
            }
        }
        tracing::debug!(match_id = %report.match_id, "merged match report");
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.teams.len()))?;
        for (player, team) in &self.teams {
            map.serialize_entry(player, team)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringside_types::MatchStats;

    #[test]
    fn test_alias_resolves_to_same_record() {
        let mut team = Team::new();
        team.insert_species("Pikachu");
        assert!(team.register_alias("Pikachu", "Sparky"));

        team.get_mut("Sparky").unwrap().kills = 3;
        assert_eq!(team.get("Pikachu").unwrap().kills, 3);
        assert_eq!(team.get("Pikachu").unwrap().nickname(), Some("Sparky"));
    }

    #[test]
    fn test_species_entries_exclude_nickname_duplicates() {
        let mut team = Team::new();
        team.insert_species("Pikachu");
        team.insert_species("Snorlax");
        team.register_alias("Pikachu", "Sparky");

        let species: Vec<&str> = team.species_entries().map(|c| c.species()).collect();
        assert_eq!(species, vec!["Pikachu", "Snorlax"]);
        // Both keys still resolve.
        assert!(team.get("Sparky").is_some());
    }

    #[test]
    fn test_register_alias_unknown_species() {
        let mut team = Team::new();
        assert!(!team.register_alias("Mewtwo", "Ghost"));
    }

    #[test]
    fn test_first_nickname_stays_primary() {
        let mut team = Team::new();
        team.insert_species("Pikachu");
        team.register_alias("Pikachu", "Sparky");
        team.register_alias("Pikachu", "Zappy");
        team.register_alias("Pikachu", "Sparky");

        let combatant = team.get("Pikachu").unwrap();
        assert_eq!(combatant.nickname(), Some("Sparky"));
        assert_eq!(combatant.aliases, vec!["Pikachu", "Sparky", "Zappy"]);
        assert_eq!(team.get("Zappy").unwrap().species(), "Pikachu");
    }

    #[test]
    fn test_merge_is_idempotent() {
        use crate::analyzer::{CombatantReport, MatchReport, SideReport};

        let report = MatchReport {
            match_id: "gen9ou-1".into(),
            sides: vec![SideReport {
                side: "p1".into(),
                player: "Alice".into(),
                combatants: vec![CombatantReport {
                    species: "Pikachu".into(),
                    nickname: Some("Sparky".into()),
                    stats: MatchStats {
                        damage_done: 100,
                        kills: 1,
                        turns_on_field: 2,
                    },
                }],
            }],
        };

        let mut roster = Roster::new();
        roster.merge_report(&report);
        roster.merge_report(&report);

        let combatant = roster.team("Alice").unwrap().get("Pikachu").unwrap();
        assert_eq!(combatant.matches_played(), 1);
        assert_eq!(combatant.kills, 1);
        assert_eq!(combatant.total_damage(), 100);
    }
}
