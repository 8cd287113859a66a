use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::LanguageTag;

/// Adapter for a call-and-return translation API. The service takes primary
/// language subtags, so `hi-IN` is sent as `hi`.
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTranslator {
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
struct TranslateRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranslateResponse {
    translated_text: String,
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<String, TranslatorError> {
        let url = format!("{}/translate", self.endpoint);
        let request = TranslateRequest {
            text,
            source_language_code: source.primary(),
            target_language_code: target.primary(),
        };

        tracing::debug!(url = %url, source = %source, target = %target, "Requesting translation");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslatorError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(format!("parse response: {e}")))?;

        Ok(result.translated_text)
    }
}
