use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::LanguageTag;

/// Test translator: records every request and answers with a canned reply,
/// the input unchanged, or a failure.
pub struct MockTranslator {
    reply: Option<String>,
    failure: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn returning(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn passthrough() -> Self {
        Self {
            reply: None,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: None,
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &LanguageTag,
        _target: &LanguageTag,
    ) -> Result<String, TranslatorError> {
        if let Some(message) = &self.failure {
            return Err(TranslatorError::ApiRequestFailed(message.clone()));
        }
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(text.to_string());
        Ok(self.reply.clone().unwrap_or_else(|| text.to_string()))
    }
}
