use crate::errors::ConfigError;
use dotenv::dotenv;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:3043";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Static,
    Http,
}

// Process-level settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: String,
    pub config_path: Option<PathBuf>,
    pub provider: ProviderKind,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("PAGEQA_PROVIDER").as_deref() {
            None | Some("http") => ProviderKind::Http,
            Some("static") => ProviderKind::Static,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "PAGEQA_PROVIDER".to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            bind: lookup("PAGEQA_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            config_path: lookup("PAGEQA_CONFIG").map(PathBuf::from),
            provider,
            log_file: lookup("PAGEQA_LOG_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.provider, ProviderKind::Http);
        assert!(config.config_path.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn reads_values() {
        let env: HashMap<&str, &str> = [
            ("PAGEQA_BIND", "127.0.0.1:8080"),
            ("PAGEQA_PROVIDER", "static"),
            ("PAGEQA_CONFIG", "/etc/pageqa.json"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.provider, ProviderKind::Static);
        assert_eq!(config.config_path, Some(PathBuf::from("/etc/pageqa.json")));
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = AppConfig::from_lookup(|key| {
            (key == "PAGEQA_PROVIDER").then(|| "chrome".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
