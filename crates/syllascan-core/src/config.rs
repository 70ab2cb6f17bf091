//! Extraction tunables.

use serde::{Deserialize, Serialize};

/// Knobs for the extraction pipeline.
///
/// The defaults come from observed behavior on real syllabi; none of them
/// is load-bearing for correctness, so they are configuration rather than
/// constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Minimum header keyword score for a table to qualify.
    pub min_table_score: usize,
    /// Cap on date-bearing lines sent to the LLM fallback (payload limit).
    pub max_llm_lines: usize,
    /// Days before the earliest assignment within which records are kept.
    /// Anything earlier is assumed to be a previous-semester reference.
    pub course_start_window_days: i64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_table_score: 2,
            max_llm_lines: 50,
            course_start_window_days: 30,
        }
    }
}
