use crate::errors::ConfigError;
use crate::models::qa::Viewport;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_UNIT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

fn enabled_by_default() -> bool {
    true
}

/// Options sub-mapping handed to a single detector, analyzer or reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOptions {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(flatten)]
    pub settings: BTreeMap<String, Value>,
}

impl Default for UnitOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: None,
            settings: BTreeMap::new(),
        }
    }
}

impl UnitOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_setting(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(key.to_string(), value.into());
        self
    }

    pub fn u64_setting(&self, key: &str) -> Option<u64> {
        self.settings.get(key).and_then(Value::as_u64)
    }

    pub fn f64_setting(&self, key: &str) -> Option<f64> {
        self.settings.get(key).and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_provider_timeout")]
    pub timeout_ms: u64,
}

fn default_provider_timeout() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_MS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

fn default_max_recommendations() -> usize {
    DEFAULT_MAX_RECOMMENDATIONS
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

fn default_unit_timeout() -> u64 {
    DEFAULT_UNIT_TIMEOUT_MS
}

/// Agent configuration, keyed by unit category name
/// (`accessibility`, `performance`, `visual`, `security`, `content`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaConfig {
    #[serde(default)]
    pub units: BTreeMap<String, UnitOptions>,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    #[serde(default = "default_unit_timeout")]
    pub default_unit_timeout_ms: u64,
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            units: BTreeMap::new(),
            provider: ProviderConfig::default(),
            recommendations: RecommendationConfig::default(),
            default_unit_timeout_ms: DEFAULT_UNIT_TIMEOUT_MS,
            report_dir: None,
        }
    }
}

impl QaConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Options for one unit category; missing entries fall back to defaults.
    pub fn unit(&self, category: &str) -> UnitOptions {
        self.units.get(category).cloned().unwrap_or_default()
    }

    pub fn with_unit(mut self, category: &str, options: UnitOptions) -> Self {
        self.units.insert(category.to_string(), options);
        self
    }

    pub fn unit_timeout(&self, category: &str) -> Duration {
        let ms = self
            .units
            .get(category)
            .and_then(|options| options.timeout_ms)
            .unwrap_or(self.default_unit_timeout_ms);
        Duration::from_millis(ms)
    }
}
