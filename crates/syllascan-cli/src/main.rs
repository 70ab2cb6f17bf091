//! SyllaScan — extract assignments from extracted syllabus text.
//!
//! Usage: `syllascan <text-file>`. With `SYLLASCAN_API_KEY` set the AI
//! fallback is used when no table qualifies; otherwise the deterministic
//! line-pattern parser runs.

use anyhow::{bail, Context};
use syllascan_core::ExtractConfig;
use syllascan_llm::{LlmConfig, LlmExtractor};
use syllascan_runtime::{Fallback, Pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        bail!("Usage: syllascan <text-file>");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path))?;

    let fallback = match LlmConfig::from_env() {
        Some(config) => {
            info!("AI fallback enabled (model {})", config.model);
            Fallback::Llm(LlmExtractor::new(config))
        }
        None => Fallback::LinePatterns,
    };

    let pipeline = Pipeline::new(ExtractConfig::default(), fallback);
    let extraction = pipeline
        .extract(&text)
        .await
        .with_context(|| format!("could not process {}", path))?;

    info!(
        "{} assignment(s) via {:?}",
        extraction.assignments.len(),
        extraction.strategy
    );
    println!("{}", serde_json::to_string_pretty(&extraction)?);
    Ok(())
}
