//! SyllaScan Core — assignment records, error types, extraction tunables.

pub mod assignment;
pub mod config;
pub mod error;

pub use assignment::{Assignment, Category};
pub use config::ExtractConfig;
pub use error::{Error, Result};
