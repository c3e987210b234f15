use chrono::Utc;

use crate::error::AppError;
use crate::models::{ContactRequest, SubmissionRecord};
use crate::sink::SubmissionSink;

use super::fields;
use super::id;
use super::metadata::RequestMetadata;

/// Validate a request and build its record. Nothing is recorded here.
pub fn accept(
    request: ContactRequest,
    meta: RequestMetadata,
) -> Result<SubmissionRecord, AppError> {
    let valid = fields::validate(request).map_err(AppError::Validation)?;

    Ok(SubmissionRecord {
        submission_id: id::generate(),
        timestamp: Utc::now(),
        name: valid.name,
        email: valid.email,
        company: valid.company,
        message: valid.message,
        user_agent: meta.user_agent,
        ip: meta.ip,
    })
}

/// Run the intake pipeline: validate, build the record, hand it to the sink.
pub fn run(
    sink: &dyn SubmissionSink,
    request: ContactRequest,
    meta: RequestMetadata,
) -> Result<SubmissionRecord, AppError> {
    let record = accept(request, meta)?;
    sink.record(&record);
    Ok(record)
}
