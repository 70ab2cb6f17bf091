//! Line-pattern assignment parsing — the table-free path.
//!
//! Scans one "assignments" section of the syllabus for three line shapes:
//! dated bullet (`date – title`), plain bullet, and `Module N: title`.
//! Deployments that do not want the AI fallback use this instead.

use once_cell::sync::Lazy;
use regex::Regex;
use syllascan_core::{Assignment, Category};
use tracing::debug;

use crate::dates;
use crate::lines::Line;

/// `<date> <dash-variant> <title>` — the date half must survive the
/// normalizer before the shape counts.
static DATED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<date>.+?)\s+[-–—]\s+(?P<title>.+)$").unwrap());

/// Parse the assignments section of a classified line sequence.
///
/// Returns empty when no assignments header is found. Scanning stops at the
/// next shouted section header, bounding the scan to one section.
pub fn parse_line_patterns(lines: &[Line]) -> Vec<Assignment> {
    let Some(start) = find_assignments_header(lines) else {
        debug!("Line-pattern parser: no assignments header found");
        return Vec::new();
    };

    let mut assignments = Vec::new();
    for line in &lines[start + 1..] {
        if line.section_header {
            break;
        }
        if let Some(assignment) = parse_line(line) {
            assignments.push(assignment);
        }
    }

    debug!(
        "Line-pattern parser: {} assignment(s) after header at line {}",
        assignments.len(),
        start
    );
    assignments
}

/// First line announcing the assignments section.
fn find_assignments_header(lines: &[Line]) -> Option<usize> {
    lines.iter().position(|l| {
        let lower = l.text.to_lowercase();
        lower.contains("assignments") || (lower.contains("schedule") && lower.contains("assignment"))
    })
}

fn parse_line(line: &Line) -> Option<Assignment> {
    let body = strip_bullet(&line.text);

    // Dated shape first: "3/15/25 – Midterm Exam".
    if let Some(cap) = DATED_LINE.captures(body) {
        if let Some(due) = dates::parse_date(&cap["date"]) {
            let title = cap["title"].trim();
            if !title.is_empty() {
                return Some(Assignment::new(title, Some(due), Category::default()));
            }
        }
    }

    // Plain bullet: the stripped text is the title, date absent.
    if line.bullet && !body.is_empty() {
        return Some(Assignment::new(body, None, Category::default()));
    }

    // Module shape keeps the whole line as the title.
    if line.module_style {
        return Some(Assignment::new(line.text.clone(), None, Category::default()));
    }

    None
}

/// Drop a leading bullet marker and its whitespace, if any.
fn strip_bullet(text: &str) -> &str {
    let mut chars = text.chars();
    if matches!(chars.next(), Some('-') | Some('•') | Some('*'))
        && chars.clone().next().is_some_and(char::is_whitespace)
    {
        chars.as_str().trim_start()
    } else {
        text
    }
}
