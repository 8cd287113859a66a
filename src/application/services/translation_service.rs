use std::sync::Arc;

use crate::application::ports::Translator;
use crate::domain::{LanguageTag, StagePayload};

use super::StageError;

/// Stage 2 of the pipeline: translate the transcription text. A single
/// call-and-return collaborator invocation wrapped in the stage contract.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    source_language: LanguageTag,
    target_language: LanguageTag,
}

impl TranslationService {
    pub fn new(
        translator: Arc<dyn Translator>,
        source_language: LanguageTag,
        target_language: LanguageTag,
    ) -> Self {
        Self {
            translator,
            source_language,
            target_language,
        }
    }

    pub async fn process(&self, text: Option<String>) -> StagePayload {
        match self.run(text).await {
            Ok(translated) => StagePayload::text(translated),
            Err(err) => {
                tracing::error!(error = %err, "Translation stage failed");
                StagePayload::from(err)
            }
        }
    }

    async fn run(&self, text: Option<String>) -> Result<String, StageError> {
        let text = text.filter(|t| !t.is_empty()).ok_or_else(|| {
            StageError::InvalidInput("expected 'transcriptionText' in the stage payload".to_string())
        })?;

        let translated = self
            .translator
            .translate(&text, &self.source_language, &self.target_language)
            .await
            .map_err(|e| StageError::DownstreamCallFailed(e.to_string()))?;

        tracing::info!(
            source = %self.source_language,
            target = %self.target_language,
            chars = translated.len(),
            "Translation completed"
        );

        Ok(translated)
    }
}
