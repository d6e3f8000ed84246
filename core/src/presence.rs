//! Turn presence counting.
//!
//! A combatant is present for a turn when it acts during that turn.
//! Acting means being the subject of a `move` event; counting any event
//! that merely mentions the alias (taking a hit, being switched out)
//! would also count passive turns and inflate the established numbers,
//! so do not widen the match beyond move actors. The
//! counter is a small state machine: `active` tracks the battle window
//! between `start` and `win`, `seen_this_turn` latches activity and is
//! flushed once per turn boundary, so a turn contributes at most one count
//! no matter how many qualifying events it holds. A pending flag is also
//! flushed at the terminal (`win` or end of sequence) so the final turn is
//! not lost. Activity before the first numbered turn (lead switches, team
//! preview) never counts.

use crate::tags::{EventKind, kind_of};
use ringside_types::{LogEvent, slot_side, split_slot};

pub fn count_turns_on_field(events: &[LogEvent], side: &str, alias: &str) -> u32 {
    let mut turns = 0;
    let mut active = false;
    let mut seen_this_turn = false;
    let mut current_turn: u32 = 0;

    for event in events {
        match kind_of(event) {
            EventKind::Start => active = true,
            EventKind::Win => {
                if active && seen_this_turn && current_turn > 0 {
                    turns += 1;
                }
                active = false;
                seen_this_turn = false;
            }
            EventKind::Turn if active => {
                if seen_this_turn && current_turn > 0 {
                    turns += 1;
                }
                seen_this_turn = false;
                current_turn = event
                    .field(2)
                    .and_then(|f| f.parse().ok())
                    .unwrap_or(current_turn + 1);
            }
            EventKind::Move if active => {
                if let Some((position, nickname)) = event.subject().and_then(split_slot)
                    && slot_side(position) == side
                    && nickname == alias
                {
                    seen_this_turn = true;
                }
            }
            _ => {}
        }
    }
    if active && seen_this_turn && current_turn > 0 {
        turns += 1;
    }
    turns
}
