//! Assignment records — the pipeline's output type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment category: a small known vocabulary plus free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    Assignment,
    Discussion,
    Quiz,
    Exam,
    Project,
    Lab,
    Other(String),
}

impl Default for Category {
    fn default() -> Self {
        Category::Assignment
    }
}

impl Category {
    /// Map a label to a known category, case-insensitively.
    ///
    /// Unknown non-empty labels are kept as free text; empty labels fall
    /// back to the default.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Category::Assignment,
            "assignment" => Category::Assignment,
            "discussion" => Category::Discussion,
            "quiz" => Category::Quiz,
            "exam" => Category::Exam,
            "project" => Category::Project,
            "lab" => Category::Lab,
            _ => Category::Other(trimmed.to_string()),
        }
    }

    /// Infer a category from substrings of an assignment title.
    pub fn infer_from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("discussion") {
            Category::Discussion
        } else if lower.contains("quiz") {
            Category::Quiz
        } else if lower.contains("exam") {
            Category::Exam
        } else if lower.contains("project") {
            Category::Project
        } else if lower.contains("lab") {
            Category::Lab
        } else {
            Category::Assignment
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Assignment => "Assignment",
            Category::Discussion => "Discussion",
            Category::Quiz => "Quiz",
            Category::Exam => "Exam",
            Category::Project => "Project",
            Category::Lab => "Lab",
            Category::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> String {
        c.as_str().to_string()
    }
}

impl From<String> for Category {
    fn from(s: String) -> Category {
        Category::parse(&s)
    }
}

/// A single extracted assignment.
///
/// `due_date` is always a normalized calendar date, never a raw string.
/// Records with neither a title nor a date are dropped by the post-filter
/// before any output leaves the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub title: String,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Category,
}

impl Assignment {
    pub fn new(title: impl Into<String>, due_date: Option<NaiveDate>, category: Category) -> Self {
        Self {
            title: title.into(),
            due_date,
            category,
        }
    }
}
