//! SyllaScan LLM — the fuzzy extraction fallback.
//!
//! When no table in the syllabus clears the score threshold, the pipeline
//! hands the date-bearing lines to an external chat-completions API with a
//! strict-JSON instruction. Everything on this path degrades to an empty
//! result: network failures, bad status codes, and malformed responses are
//! logged and swallowed, never surfaced as errors.

pub mod client;
pub mod config;
pub mod prompt;
pub mod response;

pub use client::LlmExtractor;
pub use config::LlmConfig;
