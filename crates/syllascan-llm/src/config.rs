//! LLM fallback configuration.
//!
//! Built explicitly and passed in at construction — core logic never reads
//! ambient process state, which keeps the extractor testable without
//! environment mocking. `from_env` exists for binary edges only.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }

    /// Edge-only convenience: read the key (and optional overrides) from
    /// the environment. Returns `None` without a key.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SYLLASCAN_API_KEY").ok()?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("SYLLASCAN_MODEL") {
            config.model = model;
        }
        if let Ok(endpoint) = std::env::var("SYLLASCAN_ENDPOINT") {
            config.endpoint = endpoint;
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let cfg = LlmConfig::new("sk-test");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: LlmConfig = serde_json::from_str(r#"{"api_key": "sk-test"}"#).unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }
}
