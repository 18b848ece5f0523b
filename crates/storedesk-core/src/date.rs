//! # Order Date Parsing
//!
//! Orders carry their placement time as display text, e.g.
//! `"23 Jan, 2025 10:30 AM"`. The date-range filter needs a real timestamp.
//!
//! ```text
//!   "23 Jan, 2025 10:30 AM"
//!     │   │    │    │    │
//!     day mon  year time meridiem
//!
//!   tokens are split on whitespace and commas, empty tokens dropped
//! ```
//!
//! Parsing is lenient. A missing meridiem reads as AM. Text that cannot be
//! parsed yields `None` from [`try_parse_order_date`]; [`parse_order_date`]
//! substitutes the current local time so a malformed record is still
//! filterable rather than lost.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// English month abbreviations, January first.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Zero-based month index of a three-letter abbreviation (exact case).
pub fn month_index(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .map(|i| i as u32)
}

/// Parses `"D Mon, YYYY HH:MM AM|PM"`.
pub fn try_parse_order_date(text: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() < 4 {
        return None;
    }

    let day: u32 = tokens[0].parse().ok()?;
    let month = month_index(tokens[1])? + 1;
    let year: i32 = tokens[2].parse().ok()?;

    let (hour_text, minute_text) = tokens[3].split_once(':')?;
    let mut hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = minute_text.parse().ok()?;

    let is_pm = tokens.get(4).is_some_and(|m| *m == "PM");
    if is_pm && hour < 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Like [`try_parse_order_date`] but falls back to the current local time.
pub fn parse_order_date(text: &str) -> NaiveDateTime {
    try_parse_order_date(text).unwrap_or_else(|| Local::now().naive_local())
}

// =============================================================================
// Unit Tests
// =============================================================================
