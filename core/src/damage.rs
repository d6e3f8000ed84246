//! Forward damage-attribution state machine.
//!
//! The log never states before/after health deltas for a move, so damage is
//! reconstructed: look up the target's last known health before the move,
//! then scan the window up to the next move (or the win event) for direct
//! `-damage` readings on that target. A fainting reading is assumed to have
//! consumed all remaining health, which sidesteps multi-hit arithmetic.

use crate::health::{last_known_health, subject_matches};
use crate::tags::{EventKind, kind_of};
use ringside_types::{HealthReading, LogEvent, slot_side, split_slot};

/// Damage and knockouts attributed to one combatant over one transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageTotals {
    pub damage_done: i64,
    pub kills: u32,
}

/// Attribute damage and kills for every offensive action performed by the
/// combatant acting as `alias` on `side`.
///
/// Self-targeting moves are skipped, as are moves whose declared target is
/// absent. Targets that resolve to nothing in the window are no-ops, not
/// errors.
pub fn attribute_damage(events: &[LogEvent], side: &str, alias: &str) -> DamageTotals {
    let mut totals = DamageTotals::default();
    for (index, event) in events.iter().enumerate() {
        if kind_of(event) != EventKind::Move {
            continue;
        }
        let Some(actor) = event.subject() else {
            continue;
        };
        let Some((position, nickname)) = split_slot(actor) else {
            continue;
        };
        if slot_side(position) != side || nickname != alias {
            continue;
        }
        // A spread payload carries its own target slots; the declared
        // target field may be empty in that shape.
        if let Some(slots) = spread_targets(event) {
            for slot in slots {
                let target = resolve_spread_target(events, index, slot);
                apply_move_window(events, index, &target, &mut totals);
            }
            continue;
        }

        let Some(declared_target) = event.field(4) else {
            continue;
        };
        if declared_target == actor {
            // Self-targeting or non-damaging move variant.
            continue;
        }
        apply_move_window(events, index, declared_target, &mut totals);
    }
    totals
}

/// Slot tokens from a `[spread]` payload, if the move carries one.
fn spread_targets(event: &LogEvent) -> Option<Vec<&str>> {
    let payload = event.fields.iter().find(|f| f.starts_with("[spread]"))?;
    Some(
        payload
            .trim_start_matches("[spread]")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

/// Resolve a spread slot (`"p2a"`) to the full slot token of whoever takes
/// damage or healing there next, falling back to the raw slot.
fn resolve_spread_target(events: &[LogEvent], from: usize, slot: &str) -> String {
    events[from..]
        .iter()
        .find_map(|event| {
            if !matches!(kind_of(event), EventKind::Damage | EventKind::Heal) {
                return None;
            }
            let subject = event.subject()?;
            let hit = split_slot(subject).map(|(p, _)| p == slot).unwrap_or(subject == slot);
            hit.then(|| subject.to_string())
        })
        .unwrap_or_else(|| slot.to_string())
}

fn apply_move_window(events: &[LogEvent], move_index: usize, target: &str, totals: &mut DamageTotals) {
    let pre_health = last_known_health(events, move_index, target).value;

    // The window runs up to (not including) the next move or the win event;
    // with neither, to the end of the sequence.
    let window_end = events[move_index + 1..]
        .iter()
        .position(|e| matches!(kind_of(e), EventKind::Move | EventKind::Win))
        .map(|offset| move_index + 1 + offset)
        .unwrap_or(events.len());

    let mut readings: Vec<HealthReading> = Vec::new();
    for event in &events[move_index..window_end] {
        if kind_of(event) != EventKind::Damage {
            continue;
        }
        let Some(subject) = event.subject() else {
            continue;
        };
        if !subject_matches(subject, target) {
            continue;
        }
        // Indirect damage (status, weather, items) is tagged with a cause
        // and must not be attributed to this move.
        if event.fields.get(4).is_some_and(|f| f.starts_with("[from]")) {
            continue;
        }
        if let Some(reading) = event.field(3).and_then(HealthReading::parse) {
            readings.push(reading);
        }
    }
    if readings.is_empty() {
        return;
    }

    // Most recent first. A fainting reading credits a kill and stands in
    // for the target's whole remaining pre-move health.
    let mapped: Vec<i64> = readings
        .iter()
        .rev()
        .map(|reading| {
            if reading.fainted {
                totals.kills += 1;
                pre_health
            } else {
                reading.value
            }
        })
        .collect();

    if mapped.len() == 1 {
        if readings[0].fainted {
            totals.damage_done += pre_health;
        } else {
            totals.damage_done += pre_health - mapped[0];
        }
    } else {
        // Legacy arithmetic: difference the earliest and most recent
        // readings only. Intermediate readings are not summed.
        let earliest = mapped[mapped.len() - 1];
        let most_recent = mapped[0];
        totals.damage_done += earliest - most_recent;
    }
}
