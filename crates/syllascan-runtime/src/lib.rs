//! SyllaScan Runtime — strategy selection and the persistence boundary.

pub mod orchestrator;
pub mod persist;
pub mod types;

pub use orchestrator::Pipeline;
pub use persist::AssignmentSink;
pub use types::{Extraction, Fallback, Strategy};
