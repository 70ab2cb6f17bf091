//! Error types for SyllaScan.
//!
//! Internal extraction stages never fail for "nothing found" — they return
//! empty collections so the pipeline can fall through to the next strategy.
//! These variants cover the hard failures at the outer boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty document: no text supplied")]
    EmptyDocument,

    #[error("Persistence error: {0}")]
    Persist(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
