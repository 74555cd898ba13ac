pub mod metrics;
pub mod summary;

pub use metrics::{
    category_score, compute_metrics, PenaltyTable, ACCESSIBILITY_PENALTIES, SECURITY_PENALTIES,
    UX_PENALTIES,
};
pub use summary::build_summary;
