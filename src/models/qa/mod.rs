pub mod analysis;
pub mod issue;
pub mod report;
pub mod snapshot;
pub mod status;

pub use analysis::{performance_score, AnalysisBundle, PERFORMANCE_ENTRY};
pub use issue::{Issue, IssueBuilder, IssueType, Severity};
pub use report::{CriticalIssue, Metrics, Report, Summary};
pub use snapshot::{
    AccessibilityData, AccessibilityObservation, AcquisitionOptions, AcquisitionOverrides,
    ElementRef, FormInfo, InteractiveElement, PerformanceData, Screenshot, Snapshot, Viewport,
};
pub use status::{QaResponse, QaStatus};
