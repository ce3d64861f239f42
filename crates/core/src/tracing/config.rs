//! Configuration for tracing and log output

use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Main instrumentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to startup logs
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter (e.g., "info", "debug", "tillpoint=trace")
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "tillpoint".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl InstrumentationConfig {
    /// Create configuration from environment variables
    ///
    /// - `SERVICE_NAME`: service name
    /// - `RUST_LOG`: log level filter
    /// - `LOG_FORMAT`: `json` for structured output, anything else for pretty
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = match std::env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstrumentationConfig::default();
        assert_eq!(config.service_name, "tillpoint");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_deserialization_defaults_format() {
        let config: InstrumentationConfig = serde_json::from_str(
            r#"{"service_name":"web","service_version":"1","log_level":"warn"}"#,
        )
        .unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "web");
    }
}
