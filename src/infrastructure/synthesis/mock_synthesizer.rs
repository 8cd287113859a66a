use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{AudioFormat, SpeechSynthesizer, SynthesizerError};

/// Test synthesizer: returns fixed audio bytes and records every request.
pub struct MockSynthesizer {
    audio: Bytes,
    failure: Option<String>,
    calls: Mutex<Vec<(String, String, AudioFormat)>>,
}

impl MockSynthesizer {
    pub fn returning(audio: &'static [u8]) -> Self {
        Self {
            audio: Bytes::from_static(audio),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            audio: Bytes::new(),
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, AudioFormat)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SynthesizerError> {
        if let Some(message) = &self.failure {
            return Err(SynthesizerError::ApiRequestFailed(message.clone()));
        }
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((text.to_string(), voice.to_string(), format));
        Ok(self.audio.clone())
    }
}
