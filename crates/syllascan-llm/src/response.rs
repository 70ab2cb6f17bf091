//! Defensive parsing of model responses.
//!
//! The response is untrusted text that should be JSON but often is not:
//! models wrap payloads in Markdown fences, return prose, or emit entries
//! with missing fields. Everything is validated field-by-field; anything
//! that does not check out is dropped, and a fully unusable response is an
//! empty list rather than an error.

use chrono::NaiveDate;
use serde_json::Value;
use syllascan_core::{Assignment, Category};
use syllascan_extract::dates;
use tracing::warn;

/// Parse a raw model response into assignments.
pub fn parse_assignments(raw: &str) -> Vec<Assignment> {
    let stripped = strip_code_fence(raw);

    let value: Value = match serde_json::from_str(stripped) {
        Ok(v) => v,
        Err(e) => {
            warn!("LLM response is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let Some(entries) = value.get("assignments").and_then(Value::as_array) else {
        warn!("LLM response missing 'assignments' array");
        return Vec::new();
    };

    entries.iter().filter_map(parse_entry).collect()
}

fn parse_entry(entry: &Value) -> Option<Assignment> {
    let title = entry.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let due_date = entry
        .get("dueDate")
        .and_then(Value::as_str)
        .and_then(parse_due_date);

    let category = entry
        .get("category")
        .and_then(Value::as_str)
        .map(Category::parse)
        .unwrap_or_default();

    Some(Assignment::new(title, due_date, category))
}

/// Accept the contracted `YYYY-MM-DD` shape, then fall back to the
/// normalizer's grammars for models that echo the source format.
fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| dates::parse_date(s))
}

/// Remove an optional triple-backtick wrapper, with or without a language
/// tag, before JSON parsing.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop a language tag like "json" on the opening fence line.
    let body = match body.split_once('\n') {
        Some((first, rest)) if !first.trim_start().starts_with(['{', '[']) => rest,
        _ => body,
    };
    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_response() {
        let raw = r#"{"assignments": [{"title": "Midterm", "dueDate": "2025-03-15", "category": "Exam"}]}"#;
        let out = parse_assignments(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Midterm");
        assert_eq!(
            out[0].due_date,
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(out[0].category, Category::Exam);
    }

    #[test]
    fn fenced_json_response() {
        let raw = "```json\n{\"assignments\": [{\"title\": \"Essay\"}]}\n```";
        let out = parse_assignments(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Essay");
        assert_eq!(out[0].due_date, None);
    }

    #[test]
    fn fence_without_language_tag() {
        let raw = "```\n{\"assignments\": []}\n```";
        assert_eq!(strip_code_fence(raw), r#"{"assignments": []}"#);
    }

    #[test]
    fn malformed_response_yields_empty() {
        assert!(parse_assignments("I could not find any assignments.").is_empty());
        assert!(parse_assignments("").is_empty());
        assert!(parse_assignments("{\"assignments\": \"none\"}").is_empty());
        assert!(parse_assignments("[1, 2, 3]").is_empty());
    }

    #[test]
    fn entries_validated_field_by_field() {
        let raw = r#"{"assignments": [
            {"title": "Good", "dueDate": "2025-04-01"},
            {"title": ""},
            {"dueDate": "2025-04-02"},
            {"title": "Odd date", "dueDate": "sometime in April"},
            {"title": 42}
        ]}"#;
        let out = parse_assignments(raw);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Good");
        assert_eq!(out[1].title, "Odd date");
        assert_eq!(out[1].due_date, None);
    }

    #[test]
    fn due_date_falls_back_to_normalizer_grammar() {
        let raw = r#"{"assignments": [{"title": "Quiz", "dueDate": "3/15/25"}]}"#;
        let out = parse_assignments(raw);
        assert_eq!(out[0].due_date, NaiveDate::from_ymd_opt(2025, 3, 15));
    }

    #[test]
    fn unknown_category_kept_as_free_text() {
        let raw = r#"{"assignments": [{"title": "Crit", "dueDate": "2025-02-01", "category": "Studio Critique"}]}"#;
        let out = parse_assignments(raw);
        assert_eq!(out[0].category, Category::Other("Studio Critique".into()));
    }
}
