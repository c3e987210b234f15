//! Client-side form controller for the contact page.
//!
//! The controller owns the form's field values and drives a single
//! submission at a time through the transport.

pub mod transport;

pub use transport::{ClientError, HttpTransport, SubmitReply, SubmitTransport};

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::ContactRequest;

/// Shown when the server rejects a submission without saying why.
pub const GENERIC_ERROR: &str = "Something went wrong";
/// Shown when a transport failure carries no description.
pub const SUBMIT_FAILED: &str = "Failed to submit form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "company" => Ok(Field::Company),
            "message" => Ok(Field::Message),
            other => Err(format!("Unknown form field: {other}")),
        }
    }
}

/// Current text of each input on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            company: Some(self.company.clone()),
            message: Some(self.message.clone()),
        }
    }
}

struct Inner {
    state: FormState,
    fields: FormFields,
}

/// Cheap to clone; clones share the same form.
pub struct FormController<T> {
    transport: Arc<T>,
    inner: Arc<Mutex<Inner>>,
}

impl<T> Clone for FormController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SubmitTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            inner: Arc::new(Mutex::new(Inner {
                state: FormState::Idle,
                fields: FormFields::default(),
            })),
        }
    }

    pub fn state(&self) -> FormState {
        self.lock().state.clone()
    }

    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    /// Error text for the current state; empty unless the form is in `Error`.
    pub fn error_message(&self) -> String {
        match &self.lock().state {
            FormState::Error { message } => message.clone(),
            _ => String::new(),
        }
    }

    /// Update one field. Allowed in any state, including mid-submission.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) {
        self.lock().fields.set(field, value.into());
    }

    /// Submit the current field values and return the resulting state.
    ///
    /// Does nothing while a submission is already in flight. The request
    /// carries the fields as they were when this was called; edits made while
    /// waiting are kept unless the submission succeeds.
    pub async fn on_submit(&self) -> FormState {
        let request = {
            let mut inner = self.lock();
            if inner.state == FormState::Submitting {
                return FormState::Submitting;
            }
            inner.state = FormState::Submitting;
            inner.fields.to_request()
        };

        let outcome = self.transport.submit(&request).await;

        let mut inner = self.lock();
        let next = match outcome {
            Ok(reply) if reply.is_accepted() => {
                inner.fields = FormFields::default();
                FormState::Success
            }
            Ok(reply) => FormState::Error {
                message: reply
                    .body
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            },
            Err(e) => {
                tracing::warn!("Contact form submission failed: {e}");
                let message = if e.message.is_empty() {
                    SUBMIT_FAILED.to_string()
                } else {
                    e.message
                };
                FormState::Error { message }
            }
        };

        inner.state = next.clone();
        next
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
