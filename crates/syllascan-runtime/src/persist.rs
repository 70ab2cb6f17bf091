//! Persistence boundary — the external collaborator that stores records.

use syllascan_core::{Assignment, Result};

/// Creates one persisted record per assignment under a course identifier.
///
/// Fire-and-forget from the pipeline's perspective: record IDs are never
/// needed back. A sink failure is a hard error, unlike an empty extraction.
pub trait AssignmentSink {
    fn persist(&self, course_id: &str, assignments: &[Assignment]) -> Result<()>;
}
