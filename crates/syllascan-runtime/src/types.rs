//! Runtime types.

use serde::Serialize;
use syllascan_core::Assignment;
use syllascan_llm::LlmExtractor;

/// What runs when no table clears the score threshold.
///
/// Deployment-dependent: installations without an API key stay fully
/// deterministic; others go straight to the model.
pub enum Fallback {
    LinePatterns,
    Llm(LlmExtractor),
}

/// Which strategy produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Table,
    LinePatterns,
    Llm,
}

/// Result of one syllabus-processing request.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub assignments: Vec<Assignment>,
    pub strategy: Strategy,
}
