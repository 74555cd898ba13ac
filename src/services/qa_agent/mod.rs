// src/services/qa_agent/mod.rs

pub mod agent;
pub mod compute;
pub mod fan_out;

pub use agent::QaAgent;
pub use compute::{build_summary, category_score, compute_metrics, PenaltyTable};
