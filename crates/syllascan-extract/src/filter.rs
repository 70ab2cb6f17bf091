//! Post-filter — validation, ordering, and the course-start floor.

use chrono::{Duration, NaiveDate};
use syllascan_core::Assignment;
use tracing::debug;

/// Validate and order extracted assignments.
///
/// Records with neither a title nor a date are dropped. Survivors are
/// sorted ascending by date, dateless records after dated ones in stable
/// order. Finally, dated records falling before the course-start floor
/// (the first clustered date minus `window_days`) are discarded — those are
/// almost always rows pulled from a previous-semester reference table that
/// leaked into the text. A record exactly at the floor is retained.
///
/// Idempotent: re-filtering the output changes nothing.
pub fn post_filter(mut assignments: Vec<Assignment>, window_days: i64) -> Vec<Assignment> {
    assignments.retain(|a| !a.title.trim().is_empty() || a.due_date.is_some());
    if assignments.is_empty() {
        return assignments;
    }

    assignments.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let dated: Vec<NaiveDate> = assignments.iter().filter_map(|a| a.due_date).collect();
    if let Some(floor) = course_start_floor(&dated, Duration::days(window_days)) {
        let before = assignments.len();
        assignments.retain(|a| a.due_date.map_or(true, |d| d >= floor));
        if assignments.len() < before {
            debug!(
                "Course-start floor {} dropped {} early record(s)",
                floor,
                before - assignments.len()
            );
        }
    }

    assignments
}

/// Locate the first clustered date and return it minus the window.
///
/// Leading dates more than `window` ahead of their successor are skipped as
/// outliers, but only while at least two dates would remain — with fewer
/// than three dates there is no cluster evidence and everything stands.
/// Every skipped date necessarily falls below the returned floor.
fn course_start_floor(sorted_dates: &[NaiveDate], window: Duration) -> Option<NaiveDate> {
    if sorted_dates.is_empty() {
        return None;
    }
    let mut i = 0;
    while sorted_dates.len() - i > 2 && sorted_dates[i + 1] - sorted_dates[i] > window {
        i += 1;
    }
    Some(sorted_dates[i] - window)
}
