//! Date normalization — heterogeneous date substrings to calendar dates.
//!
//! Two grammars are recognized, matching what real syllabi actually use:
//! numeric `M/D/YY` / `M/D/YYYY` (US order) and textual `Month D[,] YYYY`
//! with case-insensitive month names. ISO, ordinal, and relative dates are
//! deliberately not recognized to keep the parser predictable.
//!
//! Two-digit years use one canonical rule everywhere: 00–49 map to
//! 2000–2049, 50–99 map to 1950–1999.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b").unwrap());

// Month by 3-letter prefix, tolerating full names, an optional trailing
// period, an ordinal suffix on the day, and an optional comma.
static TEXTUAL_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
    )
    .unwrap()
});

/// Parse the first recognizable date anywhere in a text fragment.
///
/// Returns `None` when neither grammar matches — "no date" is a normal
/// outcome, not an error. Calendar-invalid matches (month 13, Feb 30) are
/// skipped and scanning continues.
pub fn parse_date(fragment: &str) -> Option<NaiveDate> {
    for cap in NUMERIC_DATE.captures_iter(fragment) {
        let month: u32 = cap[1].parse().ok()?;
        let day: u32 = cap[2].parse().ok()?;
        let year = expand_year(&cap[3])?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for cap in TEXTUAL_DATE.captures_iter(fragment) {
        let month = month_from_prefix(&cap[1])?;
        let day: u32 = cap[2].parse().ok()?;
        let year: i32 = cap[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

/// Whether the fragment contains any recognizable date.
pub fn contains_date(fragment: &str) -> bool {
    parse_date(fragment).is_some()
}

/// Expand a 2-digit year with the sliding-window rule; pass 4-digit years
/// through unchanged.
fn expand_year(digits: &str) -> Option<i32> {
    let value: i32 = digits.parse().ok()?;
    if digits.len() == 2 {
        if value < 50 {
            Some(2000 + value)
        } else {
            Some(1900 + value)
        }
    } else {
        Some(value)
    }
}

fn month_from_prefix(prefix: &str) -> Option<u32> {
    match prefix.to_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
