// src/api/mod.rs

pub mod health;
pub mod qa;

pub use health::health_handler;
pub use qa::run_qa_handler;
