//! Per-transcript orchestration.
//!
//! Drives the tokenizer, registry, alias resolver, presence counter and
//! damage attributor over one transcript and stages the result as a
//! `MatchReport`. Staging is side-effect-free: the roster is only read
//! here, and only `Roster::merge_report` writes, so concurrent transcript
//! analyses can share a roster snapshot and serialize their merges.

use crate::alias::resolve_nickname;
use crate::damage::attribute_damage;
use crate::error::AnalysisError;
use crate::presence::count_turns_on_field;
use crate::registry::{declared_species, find_players};
use crate::roster::Roster;
use crate::tokenizer::tokenize;
use ringside_types::{LogEvent, MatchStats};

/// Fully-staged analysis output for one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub match_id: String,
    pub sides: Vec<SideReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideReport {
    pub side: String,
    pub player: String,
    pub combatants: Vec<CombatantReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantReport {
    pub species: String,
    /// Nickname learned from this transcript, if any.
    pub nickname: Option<String>,
    pub stats: MatchStats,
}

/// Derive the match identifier from a replay source reference: the last
/// path segment, without a `.log` suffix or a `battle-` prefix.
pub fn match_id_from_ref(source: &str) -> String {
    let last = source.rsplit('/').next().unwrap_or(source);
    let last = last.strip_suffix(".log").unwrap_or(last);
    last.strip_prefix("battle-").unwrap_or(last).to_string()
}

pub fn analyze_transcript(
    text: &str,
    source: &str,
    roster: &Roster,
) -> Result<MatchReport, AnalysisError> {
    analyze_events(&tokenize(text), source, roster)
}

pub fn analyze_events(
    events: &[LogEvent],
    source: &str,
    roster: &Roster,
) -> Result<MatchReport, AnalysisError> {
    let participants = find_players(events)?;
    let match_id = match_id_from_ref(source);
    tracing::debug!(%match_id, p1 = %participants.p1, p2 = %participants.p2, "analyzing transcript");

    let sides = [("p1", participants.p1), ("p2", participants.p2)]
        .into_iter()
        .map(|(side, player)| analyze_side(events, side, player, roster))
        .collect();

    Ok(MatchReport { match_id, sides })
}

fn analyze_side(events: &[LogEvent], side: &str, player: String, roster: &Roster) -> SideReport {
    // Reuse the player's persisted team when one exists; declared species
    // outside it are ignored so accumulated history stays consistent.
    // Otherwise the side is staged from this transcript's declarations.
    let staged: Vec<(String, Option<String>)> = match roster.team(&player) {
        Some(team) => team
            .species_entries()
            .map(|c| (c.species().to_string(), c.nickname().map(str::to_string)))
            .collect(),
        None => declared_species(events, side)
            .into_iter()
            .map(|species| (species, None))
            .collect(),
    };

    let combatants = staged
        .into_iter()
        .map(|(species, known_nickname)| {
            let learned = resolve_nickname(events, side, &species);
            // Match this transcript's events by its own nickname when one
            // is in play; a stale stored nickname just yields zero stats.
            let key = learned
                .clone()
                .or(known_nickname)
                .unwrap_or_else(|| species.clone());
            let totals = attribute_damage(events, side, &key);
            let stats = MatchStats {
                damage_done: totals.damage_done,
                kills: totals.kills,
                turns_on_field: count_turns_on_field(events, side, &key),
            };
            CombatantReport {
                species,
                nickname: learned,
                stats,
            }
        })
        .collect();

    SideReport {
        side: side.to_string(),
        player,
        combatants,
    }
}
