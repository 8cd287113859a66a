use config::{Config, File};
use serde::Deserialize;

use super::Environment;

/// Full configuration surface of the service. Loaded from the environment's
/// `appsettings` file, overridable with `APP__`-prefixed environment
/// variables; nothing here is a hardcoded logic branch.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub pipeline: PipelineSettings,
    pub poll: PollSettings,
    pub transcribe: TranscribeApiSettings,
    pub translate: TranslateApiSettings,
    pub synthesis: SynthesisApiSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn load(environment: &Environment) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub source_language: String,
    pub target_language: String,
    pub output_bucket: String,
    pub voice_id: String,
    pub audio_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollSettings {
    pub interval_secs: u64,
    pub max_wait_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeApiSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateApiSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisApiSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackendSetting,
    pub local_path: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendSetting {
    Local,
    S3,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
