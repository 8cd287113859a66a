use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{AudioFormat, MediaStore, SpeechSynthesizer};
use crate::domain::{StagePayload, StorageLocation};

use super::StageError;

/// Stage 3, terminal: synthesize speech from the translated text and write
/// the audio artifact to the object store. The artifact key is unique per
/// invocation so concurrent runs never overwrite each other.
pub struct SynthesisService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn MediaStore>,
    output_bucket: String,
    voice: String,
    format: AudioFormat,
}

impl SynthesisService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<dyn MediaStore>,
        output_bucket: String,
        voice: String,
        format: AudioFormat,
    ) -> Self {
        Self {
            synthesizer,
            store,
            output_bucket,
            voice,
            format,
        }
    }

    pub async fn process(&self, text: Option<String>) -> StagePayload {
        match self.run(text).await {
            Ok(location) => {
                StagePayload::status(200, format!("audio artifact written to {location}"))
            }
            Err(err) => {
                tracing::error!(error = %err, "Synthesis stage failed");
                StagePayload::from(err)
            }
        }
    }

    async fn run(&self, text: Option<String>) -> Result<StorageLocation, StageError> {
        let text = text.filter(|t| !t.is_empty()).ok_or_else(|| {
            StageError::InvalidInput("expected 'translatedText' in the stage payload".to_string())
        })?;

        let audio = self
            .synthesizer
            .synthesize(&text, &self.voice, self.format)
            .await
            .map_err(|e| StageError::DownstreamCallFailed(e.to_string()))?;

        let key = format!("synthesis/{}.{}", Uuid::new_v4(), self.format.extension());
        let location = StorageLocation::new(self.output_bucket.clone(), key);
        let bytes = audio.len();

        self.store
            .put_object(&location, audio)
            .await
            .map_err(|e| StageError::DownstreamCallFailed(format!("audio upload failed: {e}")))?;

        tracing::info!(location = %location, bytes, voice = %self.voice, "Synthesized audio stored");

        Ok(location)
    }
}
