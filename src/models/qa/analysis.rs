use serde_json::Value;
use std::collections::BTreeMap;

/// Analyzer name -> that analyzer's opaque result.
pub type AnalysisBundle = BTreeMap<String, Value>;

pub const PERFORMANCE_ENTRY: &str = "performance";

/// Reads the `score` field of the `performance` entry, if it is numeric.
pub fn performance_score(bundle: &AnalysisBundle) -> Option<f64> {
    bundle
        .get(PERFORMANCE_ENTRY)
        .and_then(|entry| entry.get("score"))
        .and_then(Value::as_f64)
}
