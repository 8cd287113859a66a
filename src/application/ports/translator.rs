use async_trait::async_trait;

use crate::domain::LanguageTag;

/// Call-and-return text translation collaborator; the next stage after
/// transcription, consumed only as an interface.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<String, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}
