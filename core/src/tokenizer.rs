//! Line-oriented transcript tokenizer.

use ringside_types::LogEvent;

/// Split raw transcript text into an ordered, indexed event sequence.
///
/// Pure and total: malformed or empty text yields a partial or empty
/// sequence, never an error. Unknown tags are retained; downstream
/// components simply never match them. Indices are 1-based source line
/// numbers, so provenance survives blank-line filtering.
pub fn tokenize(text: &str) -> Vec<LogEvent> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| LogEvent::from_line(i + 1, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_order_and_line_numbers() {
        let events = tokenize("|player|p1|Alice\n\n|start\n|turn|1\n");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].tag(), "player");
        assert_eq!(events[0].index, 1);
        assert_eq!(events[1].tag(), "start");
        assert_eq!(events[1].index, 3);
        assert_eq!(events[2].index, 4);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n  \n").is_empty());
    }

    #[test]
    fn test_tokenize_retains_unknown_tags() {
        let events = tokenize("|j|someone\n|upkeep\n|-weather|RainDance");
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].tag(), "-weather");
    }
}
