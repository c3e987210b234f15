use std::sync::Arc;

use crate::sink::SubmissionSink;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sink: Arc<dyn SubmissionSink>,
}
