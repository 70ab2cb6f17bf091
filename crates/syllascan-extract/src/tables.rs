//! Ad-hoc table extraction, scoring, and selection.
//!
//! Syllabi rarely contain real tables — just contiguous runs of lines that
//! look columnar or dated. This module groups those runs, splits them into
//! header + rows, and scores each candidate by keyword overlap so the
//! pipeline can pick the one that most resembles an assignment schedule.

use tracing::debug;

use crate::lines::{split_columns, Line};

/// Header vocabulary for the keyword-overlap score.
const HEADER_KEYWORDS: &[&str] = &[
    "date",
    "due",
    "name",
    "event",
    "points",
    "assignment",
    "discussion",
    "module",
    "title",
    "deadline",
    "task",
    "homework",
    "project",
];

/// One extracted candidate table.
///
/// Rows keep whatever cell count their source line produced; they are never
/// re-padded to the header width, so column lookups must tolerate
/// out-of-range indices.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub score: usize,
}

/// Group contiguous candidate lines into tables.
///
/// A table opens at a line that is multi-column or date-bearing and keeps
/// accumulating while lines satisfy either condition. A run shorter than two
/// lines is discarded — a single line never becomes a table. Lines are
/// partitioned: no line belongs to two tables.
pub fn extract_tables(lines: &[Line]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in lines {
        if line.multi_column || line.has_date {
            run.push(&line.text);
        } else {
            close_run(&mut run, &mut tables);
        }
    }
    close_run(&mut run, &mut tables);

    debug!("Extracted {} candidate table(s)", tables.len());
    tables
}

fn close_run(run: &mut Vec<&str>, tables: &mut Vec<Table>) {
    if run.len() >= 2 {
        let headers = split_columns(run[0]);
        let rows = run[1..].iter().map(|l| split_columns(l)).collect();
        let score = score_headers(&headers);
        tables.push(Table {
            headers,
            rows,
            score,
        });
    }
    run.clear();
}

/// Keyword-overlap score: total occurrences of the header vocabulary in the
/// concatenated, lowercased header text.
pub fn score_headers(headers: &[String]) -> usize {
    let joined = headers.join(" ").to_lowercase();
    HEADER_KEYWORDS
        .iter()
        .map(|kw| joined.matches(kw).count())
        .sum()
}

/// Pick the best-scoring table, if any clears the minimum score.
///
/// Ties go to extraction order (first wins). Returns `None` when no table
/// qualifies, which sends the pipeline down the fallback path.
pub fn select_table(tables: &[Table], min_score: usize) -> Option<&Table> {
    let top = tables.iter().map(|t| t.score).max()?;
    let best = tables.iter().find(|t| t.score == top)?;
    if best.score >= min_score {
        Some(best)
    } else {
        debug!(
            "No suitable table: best score {} below threshold {}",
            best.score, min_score
        );
        None
    }
}
