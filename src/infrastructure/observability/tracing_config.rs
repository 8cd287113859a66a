use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub level: String,
    pub json_format: bool,
    pub environment: String,
}

impl TracingConfig {
    pub fn new(logging: &LoggingSettings, environment: &str) -> Self {
        Self {
            level: logging.level.clone(),
            json_format: logging.enable_json,
            environment: environment.to_string(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
        }
    }
}
