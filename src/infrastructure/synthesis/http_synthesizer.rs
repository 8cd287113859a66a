use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioFormat, SpeechSynthesizer, SynthesizerError};

/// Adapter for a call-and-return speech synthesis API that ships the audio
/// base64-encoded inside the JSON response.
pub struct HttpSynthesizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpSynthesizer {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    output_format: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SynthesizeResponse {
    audio_stream: String,
}

#[async_trait]
impl SpeechSynthesizer for HttpSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SynthesizerError> {
        let url = format!("{}/synthesize", self.endpoint);
        let request = SynthesizeRequest {
            text,
            voice_id: voice,
            output_format: format.as_str(),
        };

        tracing::debug!(url = %url, voice = voice, format = %format, "Requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesizerError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let result: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SynthesizerError::InvalidResponse(format!("parse response: {e}")))?;

        let audio = general_purpose::STANDARD
            .decode(&result.audio_stream)
            .map_err(|e| SynthesizerError::InvalidResponse(format!("decode audio: {e}")))?;

        Ok(Bytes::from(audio))
    }
}
