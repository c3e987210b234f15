use serde::{Deserialize, Serialize};

/// Acknowledgement returned with every accepted submission.
pub const ACCEPTED_MESSAGE: &str = "Thank you for your message. We'll get back to you soon!";

/// Contact form payload as sent by the page.
///
/// Every field is optional here so that a missing field surfaces as a
/// validation failure rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn accepted(submission_id: String) -> Self {
        Self {
            success: true,
            message: Some(ACCEPTED_MESSAGE.to_string()),
            submission_id: Some(submission_id),
            error: None,
        }
    }

    pub fn rejected(error: String) -> Self {
        Self {
            success: false,
            message: None,
            submission_id: None,
            error: Some(error),
        }
    }
}
