pub mod tracing_sink;

pub use tracing_sink::TracingSink;

use crate::models::SubmissionRecord;

/// Destination for accepted submissions.
///
/// Recording is fire-and-forget: implementations must not block the caller
/// on delivery and have no way to fail the submission that produced the record.
pub trait SubmissionSink: Send + Sync {
    fn record(&self, record: &SubmissionRecord);
}
