use crate::models::qa::AcquisitionOverrides;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParamsRunQa {
    pub url: String,
    pub take_screenshots: Option<bool>,
    pub analyze_accessibility: Option<bool>,
    pub measure_performance: Option<bool>,
    pub extract_forms: Option<bool>,
    pub map_user_flows: Option<bool>,
}

impl ParamsRunQa {
    pub fn overrides(&self) -> AcquisitionOverrides {
        AcquisitionOverrides {
            take_screenshots: self.take_screenshots,
            analyze_accessibility: self.analyze_accessibility,
            measure_performance: self.measure_performance,
            extract_forms: self.extract_forms,
            map_user_flows: self.map_user_flows,
        }
    }
}
