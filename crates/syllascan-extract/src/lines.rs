//! Line classification — flags the structurally interesting lines.
//!
//! One pass over the raw text produces request-scoped [`Line`] values that
//! the table extractor and line-pattern parser consume directly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates;

/// Column delimiter: a tab or a run of 3+ whitespace characters.
static COLUMN_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t|\s{3,}").unwrap());

static MODULE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^module\s+\d+:?").unwrap());

/// A trimmed text line plus classification flags.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    /// Splitting on the column delimiter yields 2+ non-empty cells.
    pub multi_column: bool,
    /// Either date grammar matches somewhere in the line.
    pub has_date: bool,
    /// Starts with `-`, `•`, or `*` followed by whitespace.
    pub bullet: bool,
    /// `Module <n>[:]` prefix.
    pub module_style: bool,
    /// Shouted heading: uppercased line equals itself, length > 5, no hyphen.
    pub section_header: bool,
}

/// Classify every non-blank line of the input text.
pub fn classify(text: &str) -> Vec<Line> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Line {
    Line {
        multi_column: is_multi_column(line),
        has_date: dates::contains_date(line),
        bullet: is_bullet(line),
        module_style: MODULE_PREFIX.is_match(line),
        section_header: is_section_header(line),
        text: line.to_string(),
    }
}

/// Split a line into cells on the column delimiter, dropping empty cells.
pub fn split_columns(line: &str) -> Vec<String> {
    COLUMN_DELIM
        .split(line)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_multi_column(line: &str) -> bool {
    COLUMN_DELIM.is_match(line) && split_columns(line).len() >= 2
}

fn is_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some('-') | Some('•') | Some('*'))
        && chars.next().is_some_and(char::is_whitespace)
}

fn is_section_header(line: &str) -> bool {
    line.len() > 5 && !line.contains('-') && line == line.to_uppercase()
}
