// src/models/mod.rs

pub mod api;
pub mod app;
pub mod config;
pub mod qa;

pub use api::ParamsRunQa;
pub use app::{AppConfig, AppState, ProviderKind};
pub use config::{ProviderConfig, QaConfig, RecommendationConfig, UnitOptions};
pub use qa::{QaResponse, QaStatus};
