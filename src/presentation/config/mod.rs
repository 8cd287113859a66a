mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PipelineSettings, PollSettings, ServerSettings, Settings,
    StorageBackendSetting, StorageSettings, SynthesisApiSettings, TranscribeApiSettings,
    TranslateApiSettings,
};
