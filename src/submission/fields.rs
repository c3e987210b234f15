use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContactRequest;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const COMPANY_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Submission fields that passed every rule, trimmed and normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Apply every rule to the request and collect the failures in rule order.
///
/// Lower bounds use the trimmed length while upper bounds use the raw length,
/// so a long run of whitespace can fail both checks on the same field.
pub fn check(request: &ContactRequest) -> Vec<String> {
    let mut failures = Vec::new();

    let name = request.name.as_deref();
    if name.is_none_or(|n| char_len(n.trim()) < NAME_MIN) {
        failures.push("Name must be at least 2 characters long".to_string());
    }
    if name.is_some_and(|n| char_len(n) > NAME_MAX) {
        failures.push("Name must be less than 100 characters".to_string());
    }

    if !request.email.as_deref().is_some_and(is_valid_email) {
        failures.push("Valid email address is required".to_string());
    }

    let message = request.message.as_deref();
    if message.is_none_or(|m| char_len(m.trim()) < MESSAGE_MIN) {
        failures.push("Message must be at least 10 characters long".to_string());
    }
    if message.is_some_and(|m| char_len(m) > MESSAGE_MAX) {
        failures.push("Message must be less than 5000 characters".to_string());
    }

    if request
        .company
        .as_deref()
        .is_some_and(|c| char_len(c) > COMPANY_MAX)
    {
        failures.push("Company name must be less than 100 characters".to_string());
    }

    failures
}

/// Validate and normalize a request, or return every rule it breaks.
pub fn validate(request: ContactRequest) -> Result<ValidatedFields, Vec<String>> {
    let failures = check(&request);

    match (request.name, request.email, request.message) {
        (Some(name), Some(email), Some(message)) if failures.is_empty() => Ok(ValidatedFields {
            name: name.trim().to_string(),
            email: normalize_email(&email),
            company: request
                .company
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            message: message.trim().to_string(),
        }),
        _ => Err(failures),
    }
}

/// Permissive `local@domain.tld` shape check. Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
