pub mod contact;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub const CONTACT_PATH: &str = "/api/contact";

pub fn api_routes() -> Router<SharedState> {
    Router::new().route(CONTACT_PATH, post(contact::submit))
}
