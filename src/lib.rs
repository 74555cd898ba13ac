// src/lib.rs

pub mod api;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;

pub use errors::AnalysisError;
pub use models::{AppState, QaConfig};
pub use services::QaAgent;
