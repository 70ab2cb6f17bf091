//! Table-based assignment parsing — semantic columns out of a scored table.

use syllascan_core::{Assignment, Category};
use tracing::debug;

use crate::dates;
use crate::tables::Table;

const DATE_HEADERS: &[&str] = &["date", "due", "deadline"];
const TITLE_HEADERS: &[&str] = &["name", "title", "assignment", "task"];
const TYPE_HEADERS: &[&str] = &["type", "category", "kind"];

/// Emit one assignment per parseable row of a qualifying table.
///
/// A row is skipped when no cell yields a date or when no usable title
/// remains; a bad row never aborts the table. Output preserves source row
/// order.
pub fn parse_table(table: &Table) -> Vec<Assignment> {
    let date_col = find_column(&table.headers, DATE_HEADERS);
    let title_col = find_column(&table.headers, TITLE_HEADERS);
    let type_col = find_column(&table.headers, TYPE_HEADERS);

    let mut assignments = Vec::new();
    for row in &table.rows {
        let Some(due) = resolve_date(row, date_col) else {
            continue;
        };
        let Some(title) = resolve_title(row, title_col) else {
            continue;
        };
        let category = resolve_category(row, type_col, &title);
        assignments.push(Assignment::new(title, Some(due), category));
    }

    debug!(
        "Table parser: {} assignment(s) from {} row(s)",
        assignments.len(),
        table.rows.len()
    );
    assignments
}

/// First header containing any of the keywords (case-insensitive).
fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let lower = h.to_lowercase();
        keywords.iter().any(|kw| lower.contains(kw))
    })
}

/// Due date: the identified column's cell if it parses, otherwise the first
/// cell anywhere in the row the date normalizer accepts.
fn resolve_date(row: &[String], date_col: Option<usize>) -> Option<chrono::NaiveDate> {
    date_col
        .and_then(|i| row.get(i))
        .and_then(|cell| dates::parse_date(cell))
        .or_else(|| row.iter().find_map(|cell| dates::parse_date(cell)))
}

/// Title: the identified column's cell if non-empty, otherwise the longest
/// cell that is not itself a parseable date (first on ties).
fn resolve_title(row: &[String], title_col: Option<usize>) -> Option<String> {
    let from_column = title_col
        .and_then(|i| row.get(i))
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty());
    from_column.or_else(|| longest_non_date_cell(row))
}

fn longest_non_date_cell(row: &[String]) -> Option<String> {
    let mut best: Option<&str> = None;
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() || dates::parse_date(trimmed).is_some() {
            continue;
        }
        if best.map_or(true, |b| trimmed.len() > b.len()) {
            best = Some(trimmed);
        }
    }
    best.map(str::to_string)
}

fn resolve_category(row: &[String], type_col: Option<usize>, title: &str) -> Category {
    type_col
        .and_then(|i| row.get(i))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(Category::parse)
        .unwrap_or_else(|| Category::infer_from_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            score: crate::tables::score_headers(
                &headers.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            ),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn simple_date_title_table() {
        let t = table(&["Date", "Title"], &[&["3/15/25", "Midterm Exam"]]);
        let out = parse_table(&t);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Midterm Exam");
        assert_eq!(out[0].due_date, Some(date(2025, 3, 15)));
        assert_eq!(out[0].category, Category::Exam);
    }

    #[test]
    fn type_column_used_when_present() {
        let t = table(
            &["Due Date", "Assignment Name", "Type"],
            &[&["9/5/25", "Week 1 Post", "Discussion"]],
        );
        let out = parse_table(&t);
        assert_eq!(out[0].category, Category::Discussion);
    }

    #[test]
    fn date_scanned_from_any_cell_without_date_column() {
        let t = table(
            &["Assignment", "Points"],
            &[&["Essay draft", "due 10/3/25"]],
        );
        let out = parse_table(&t);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].due_date, Some(date(2025, 10, 3)));
        assert_eq!(out[0].title, "Essay draft");
    }

    #[test]
    fn row_without_date_dropped() {
        let t = table(
            &["Date", "Title"],
            &[&["TBD", "Mystery assignment"], &["4/1/25", "Quiz 2"]],
        );
        let out = parse_table(&t);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Quiz 2");
    }

    #[test]
    fn title_falls_back_to_longest_non_date_cell() {
        // No title-ish header; the longest non-date cell wins.
        let t = table(
            &["Due", "Details", "Points"],
            &[&["11/2/25", "Group project milestone report", "50"]],
        );
        let out = parse_table(&t);
        assert_eq!(out[0].title, "Group project milestone report");
        assert_eq!(out[0].category, Category::Project);
    }

    #[test]
    fn short_row_tolerated() {
        // Row narrower than the header set; the title column index is out
        // of range, so the fallback title resolution kicks in.
        let t = table(
            &["Date", "Points", "Name"],
            &[&["12/12/25", "Final exam"]],
        );
        let out = parse_table(&t);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Final exam");
    }

    #[test]
    fn row_with_no_usable_title_dropped() {
        // No title column and every cell is a date.
        let t = table(&["Due", "Points"], &[&["3/15/25", "4/1/25"]]);
        assert!(parse_table(&t).is_empty());
    }

    #[test]
    fn rows_emitted_in_source_order() {
        let t = table(
            &["Date", "Title"],
            &[
                &["5/1/25", "Final paper"],
                &["2/1/25", "Proposal"],
                &["3/1/25", "Annotated bibliography"],
            ],
        );
        let titles: Vec<_> = parse_table(&t).into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Final paper", "Proposal", "Annotated bibliography"]);
    }
}
