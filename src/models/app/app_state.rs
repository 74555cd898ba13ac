use crate::services::qa_agent::QaAgent;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<QaAgent>,
}
