//! Replay log events and the small field grammars they carry.
//!
//! A replay transcript is newline-delimited; each line splits on `|` into
//! fields. Field 0 is empty (lines start with the delimiter), field 1 is the
//! event tag, and the meaning of the remaining fields depends on the tag.
//! Nothing here validates the tag vocabulary - unknown tags are kept and
//! simply never matched downstream.

use serde::Serialize;

/// One line of a replay transcript, split into its delimited fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    /// 1-based line number in the source transcript.
    pub index: usize,
    pub fields: Vec<String>,
}

impl LogEvent {
    pub fn from_line(index: usize, line: &str) -> Self {
        Self {
            index,
            fields: line
                .trim_end_matches('\r')
                .split('|')
                .map(str::to_string)
                .collect(),
        }
    }

    /// The event tag (`player`, `switch`, `-damage`, ...). Empty for lines
    /// that carry no delimiter, e.g. chat spillover.
    pub fn tag(&self) -> &str {
        self.fields.get(1).map(String::as_str).unwrap_or("")
    }

    /// A field by raw index, with empty fields treated as absent.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|f| !f.is_empty())
    }

    /// The event subject: the slot token of the combatant the event is
    /// about (move actor, damage/heal/switch target).
    pub fn subject(&self) -> Option<&str> {
        self.field(2)
    }
}

/// Split a slot token like `"p1a: Sparky"` into position and nickname.
pub fn split_slot(token: &str) -> Option<(&str, &str)> {
    token.split_once(": ")
}

/// The side (`p1`/`p2`) a slot position like `"p1a"` belongs to.
pub fn slot_side(position: &str) -> &str {
    position.get(..2).unwrap_or(position)
}

/// The species identifier from a species-details field
/// (`"Pikachu, L50, M"` -> `"Pikachu"`).
pub fn species_of(details: &str) -> &str {
    details.split(',').next().unwrap_or(details).trim()
}

/// A health fraction as reported by the log, on a 100-point baseline.
///
/// Appears as `"40/100"`, `"0 fnt"` on a knockout, or `"100/100 par"` with a
/// trailing status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReading {
    pub value: i64,
    pub fainted: bool,
}

impl HealthReading {
    /// The battle-start assumption when no reading exists yet.
    pub const FULL: HealthReading = HealthReading {
        value: 100,
        fainted: false,
    };

    pub fn parse(raw: &str) -> Option<Self> {
        let numerator = raw.trim().split('/').next()?;
        let digits_end = numerator
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(numerator.len());
        let value = numerator[..digits_end].parse().ok()?;
        Some(Self {
            value,
            fainted: raw.contains("fnt"),
        })
    }
}
