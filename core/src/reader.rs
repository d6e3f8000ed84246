//! Mmap-backed replay file reader with parallel line parsing.

use crate::error::AnalysisError;
use memchr::memchr_iter;
use memmap2::Mmap;
use rayon::prelude::*;
use ringside_types::LogEvent;
use std::fs::File;
use std::path::Path;

/// Read a replay file into its event sequence.
///
/// Line boundaries are found with a byte scan, then lines are split into
/// events in parallel. Non-UTF-8 lines are dropped rather than failing the
/// whole file.
pub fn read_replay_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogEvent>, AnalysisError> {
    let io_err = |source| AnalysisError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    };
    let file = File::open(&path).map_err(io_err)?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
    let bytes = mmap.as_ref();

    // Find all line boundaries
    let mut line_ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        if end > start {
            line_ranges.push((start, end));
        }
        start = end + 1;
    }
    if start < bytes.len() {
        line_ranges.push((start, bytes.len()));
    }

    let events: Vec<LogEvent> = line_ranges
        .par_iter()
        .enumerate()
        .filter_map(|(idx, &(start, end))| {
            let line = std::str::from_utf8(&bytes[start..end]).ok()?;
            if line.trim().is_empty() {
                None
            } else {
                Some(LogEvent::from_line(idx + 1, line))
            }
        })
        .collect();

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_replay_file() {
        let path = std::env::temp_dir().join("ringside-reader-test.log");
        let mut file = File::create(&path).unwrap();
        write!(file, "|player|p1|Alice\n|start\n|turn|1").unwrap();
        drop(file);

        let events = read_replay_file(&path).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].tag(), "player");
        assert_eq!(events[2].tag(), "turn");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_replay_file("/definitely/not/here.log").unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
