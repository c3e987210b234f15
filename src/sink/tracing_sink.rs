use crate::models::SubmissionRecord;

use super::SubmissionSink;

/// Writes each accepted submission to the log stream as pretty-printed JSON.
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for TracingSink {
    fn record(&self, record: &SubmissionRecord) {
        match serde_json::to_string_pretty(record) {
            Ok(json) => tracing::info!(
                target: "contact_submission",
                submission_id = %record.submission_id,
                "Contact form submission:\n{json}"
            ),
            Err(e) => tracing::warn!(
                target: "contact_submission",
                submission_id = %record.submission_id,
                "Failed to serialize submission record: {e}"
            ),
        }
    }
}
