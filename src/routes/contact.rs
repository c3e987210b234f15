use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use bytes::Bytes;

use crate::error::AppError;
use crate::models::ContactResponse;
use crate::state::SharedState;
use crate::submission::{metadata, parser, pipeline};

/// `POST /api/contact`
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let request = parser::parse_body(&body).map_err(AppError::Internal)?;
    let meta = metadata::extract(&headers);

    let record = pipeline::run(state.sink.as_ref(), request, meta)?;

    Ok(Json(ContactResponse::accepted(record.submission_id)))
}
