//! Centralized number formatting for CLI tables.
//!
//! All numeric display formatting goes through this module so the roster
//! and per-match views render consistently.

/// Format a number with K/M suffix for compact display.
///
/// # Examples
/// ```
/// use ringside_types::formatting::format_compact;
/// assert_eq!(format_compact(500), "500");
/// assert_eq!(format_compact(1_500), "1.50K");
/// assert_eq!(format_compact(2_250_000), "2.25M");
/// ```
pub fn format_compact(n: i64) -> String {
    let n_abs = n.abs();
    if n_abs >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n_abs >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Format a number with thousands separators.
///
/// # Examples
/// ```
/// use ringside_types::formatting::format_thousands;
/// assert_eq!(format_thousands(500), "500");
/// assert_eq!(format_thousands(1_500), "1,500");
/// assert_eq!(format_thousands(-12_345), "-12,345");
/// ```
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}
