//! Chat-completions client for the extraction fallback.
//!
//! One blocking round-trip per syllabus with a caller-imposed timeout. No
//! retries here — callers that want retry wrap this with their own bounded
//! policy.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use syllascan_core::Assignment;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::response;

/// AI extraction fallback over an OpenAI-compatible endpoint.
pub struct LlmExtractor {
    client: Client,
    config: LlmConfig,
}

impl LlmExtractor {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Submit candidate lines and parse the response.
    ///
    /// Every failure mode — network, timeout, non-2xx, malformed payload —
    /// is logged and collapses to an empty list. Callers treat that as
    /// "extraction yielded nothing", not as a fatal error.
    pub async fn extract(&self, candidate_lines: &[String]) -> Vec<Assignment> {
        if candidate_lines.is_empty() {
            return Vec::new();
        }

        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_user_prompt(candidate_lines)},
            ],
            "temperature": 0.0,
        });

        debug!(
            "LLM fallback: {} candidate line(s) to {}",
            candidate_lines.len(),
            self.config.endpoint
        );

        let result = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&body)
            .send()
            .await;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("LLM request failed: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API error {}: {}", status, body);
            return Vec::new();
        }

        let payload: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("LLM response body unreadable: {}", e);
                return Vec::new();
            }
        };

        let Some(content) = payload["choices"][0]["message"]["content"].as_str() else {
            warn!("LLM response missing message content");
            return Vec::new();
        };

        let assignments = response::parse_assignments(content);
        debug!("LLM fallback produced {} assignment(s)", assignments.len());
        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_lines_skip_the_network() {
        let extractor = LlmExtractor::new(LlmConfig::new("sk-test"));
        let out = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(extractor.extract(&[]));
        assert!(out.is_empty());
    }
}
