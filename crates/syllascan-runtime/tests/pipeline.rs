//! End-to-end pipeline tests on realistic syllabus text.

use chrono::NaiveDate;
use syllascan_core::Category;
use syllascan_runtime::{Pipeline, Strategy};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

const TABULAR_SYLLABUS: &str = "\
HIST 2310: THE ATLANTIC WORLD
Professor R. Alvarez

COURSE SCHEDULE

Due Date    Assignment Name    Type
1/20/25    Primary source response    Discussion
2/10/25    Map quiz    Quiz
3/3/25    Midterm exam    Exam
4/14/25    Research paper draft
5/5/25    Final research paper    Project

GRADING
Participation is worth 10% of the final grade.
";

#[tokio::test]
async fn tabular_syllabus_end_to_end() {
    let out = Pipeline::deterministic()
        .extract(TABULAR_SYLLABUS)
        .await
        .unwrap();

    assert_eq!(out.strategy, Strategy::Table);
    assert_eq!(out.assignments.len(), 5);

    assert_eq!(out.assignments[0].title, "Primary source response");
    assert_eq!(out.assignments[0].due_date, date(2025, 1, 20));
    assert_eq!(out.assignments[0].category, Category::Discussion);

    // Row without a Type cell: category falls back to the default.
    assert_eq!(out.assignments[3].title, "Research paper draft");
    assert_eq!(out.assignments[3].category, Category::Assignment);

    // Output is date-ordered.
    let dates: Vec<_> = out.assignments.iter().map(|a| a.due_date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

const BULLETED_SYLLABUS: &str = "\
ENGL 1101: COMPOSITION

Weekly meetings are Tuesday and Thursday.

ASSIGNMENTS
- 9/5/25 - Diagnostic essay
- 9/19/25 - Rhetorical analysis
- Module 3 Discussion: Peer review
- 10/24/25 - Argument essay

COURSE POLICIES
Late work is penalized one letter grade per day.
";

#[tokio::test]
async fn bulleted_syllabus_uses_line_patterns() {
    let out = Pipeline::deterministic()
        .extract(BULLETED_SYLLABUS)
        .await
        .unwrap();

    assert_eq!(out.strategy, Strategy::LinePatterns);
    assert_eq!(out.assignments.len(), 4);

    // Dated records first, in date order; the dateless module entry last.
    assert_eq!(out.assignments[0].title, "Diagnostic essay");
    assert_eq!(out.assignments[0].due_date, date(2025, 9, 5));
    assert_eq!(out.assignments[3].title, "Module 3 Discussion: Peer review");
    assert_eq!(out.assignments[3].due_date, None);

    // Nothing from COURSE POLICIES leaked in.
    assert!(out
        .assignments
        .iter()
        .all(|a| !a.title.contains("Late work")));
}

const SYLLABUS_WITH_STALE_ROW: &str = "\
Schedule of assignment due dates

Date    Title
11/1/24    Proposal (previous semester reference)
1/13/25    Project proposal
1/27/25    Annotated bibliography
2/17/25    First draft
";

#[tokio::test]
async fn previous_semester_row_filtered_out() {
    let out = Pipeline::deterministic()
        .extract(SYLLABUS_WITH_STALE_ROW)
        .await
        .unwrap();

    assert_eq!(out.strategy, Strategy::Table);
    let titles: Vec<_> = out.assignments.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Project proposal", "Annotated bibliography", "First draft"]
    );
}

#[tokio::test]
async fn prose_only_syllabus_finds_nothing_without_error() {
    let text = "PHIL 3000\nThis seminar has no fixed deadlines.\nGrades rest on participation.";
    let out = Pipeline::deterministic().extract(text).await.unwrap();
    assert_eq!(out.strategy, Strategy::LinePatterns);
    assert!(out.assignments.is_empty());
}
