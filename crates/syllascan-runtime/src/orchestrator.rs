//! Pipeline orchestrator — table first, fallback second, post-filter always.

use syllascan_core::{Error, ExtractConfig, Result};
use syllascan_extract::{lines, patterns, table_parse, tables};
use tracing::{debug, info};

use crate::persist::AssignmentSink;
use crate::types::{Extraction, Fallback, Strategy};

/// One syllabus-processing pipeline.
///
/// Stateless between requests: every intermediate (classified lines,
/// candidate tables) lives only for the duration of one `extract` call.
pub struct Pipeline {
    config: ExtractConfig,
    fallback: Fallback,
}

impl Pipeline {
    pub fn new(config: ExtractConfig, fallback: Fallback) -> Self {
        Self { config, fallback }
    }

    /// Fully deterministic pipeline with default tunables.
    pub fn deterministic() -> Self {
        Self::new(ExtractConfig::default(), Fallback::LinePatterns)
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract assignments from raw syllabus text.
    ///
    /// Whitespace-only input is a hard error — callers must be able to tell
    /// "we could not process this" from "we found nothing", which comes back
    /// as an empty list.
    pub async fn extract(&self, text: &str) -> Result<Extraction> {
        if text.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }

        let classified = lines::classify(text);
        let candidate_tables = tables::extract_tables(&classified);

        let (raw, strategy) =
            match tables::select_table(&candidate_tables, self.config.min_table_score) {
                Some(table) => (table_parse::parse_table(table), Strategy::Table),
                None => match &self.fallback {
                    Fallback::LinePatterns => {
                        (patterns::parse_line_patterns(&classified), Strategy::LinePatterns)
                    }
                    Fallback::Llm(extractor) => {
                        let candidates =
                            collect_candidate_lines(&classified, self.config.max_llm_lines);
                        (extractor.extract(&candidates).await, Strategy::Llm)
                    }
                },
            };

        let assignments =
            syllascan_extract::post_filter(raw, self.config.course_start_window_days);
        info!(
            "Extraction via {:?}: {} assignment(s)",
            strategy,
            assignments.len()
        );
        Ok(Extraction {
            assignments,
            strategy,
        })
    }

    /// Extract and hand the validated list to the persistence collaborator.
    pub async fn run(
        &self,
        course_id: &str,
        text: &str,
        sink: &dyn AssignmentSink,
    ) -> Result<Extraction> {
        let extraction = self.extract(text).await?;
        sink.persist(course_id, &extraction.assignments)?;
        debug!(
            "Persisted {} assignment(s) for course {}",
            extraction.assignments.len(),
            course_id
        );
        Ok(extraction)
    }
}

/// Date-bearing lines for the LLM fallback, capped to respect payload
/// limits.
pub fn collect_candidate_lines(classified: &[lines::Line], cap: usize) -> Vec<String> {
    classified
        .iter()
        .filter(|l| l.has_date)
        .take(cap)
        .map(|l| l.text.clone())
        .collect()
}
