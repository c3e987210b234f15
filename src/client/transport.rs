use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::models::{ContactRequest, ContactResponse};
use crate::routes::CONTACT_PATH;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientError {
    pub message: String,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<String> for ClientError {
    fn from(s: String) -> Self {
        ClientError { message: s }
    }
}

impl From<&str> for ClientError {
    fn from(s: &str) -> Self {
        ClientError {
            message: s.to_string(),
        }
    }
}

/// Decoded reply from the intake endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReply {
    pub status: u16,
    pub body: ContactResponse,
}

impl SubmitReply {
    /// Accepted only on a 2xx status with `success: true` in the body.
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status) && self.body.success
    }
}

/// One request/response exchange with the intake endpoint.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReply, ClientError>;
}

/// Posts submissions as JSON to `<base_url>/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReply, ClientError> {
        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::from(e.to_string()))?;

        let status = resp.status().as_u16();
        let body: ContactResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::from(e.to_string()))?;

        Ok(SubmitReply { status, body })
    }
}
