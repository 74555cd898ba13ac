// src/services/mod.rs

pub mod analyzers;
pub mod detectors;
pub mod provider;
pub mod qa_agent;
pub mod recommendation;
pub mod reporters;

pub use analyzers::Analyzer;
pub use detectors::Detector;
pub use provider::{HttpPageProvider, PageProvider, StaticPageProvider};
pub use qa_agent::QaAgent;
pub use recommendation::{RecommendationEngine, RuleBasedRecommendations};
pub use reporters::Reporter;
