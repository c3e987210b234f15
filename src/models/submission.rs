use chrono::{DateTime, Utc};
use serde::Serialize;

/// An accepted submission, normalized and enriched with server-side metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub submission_id: String,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}
