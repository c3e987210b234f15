use crate::models::ContactRequest;

/// Parse a contact request body. The body must be JSON whatever the
/// declared Content-Type; anything else is a parse error.
pub fn parse_body(body: &[u8]) -> Result<ContactRequest, String> {
    serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
}
