use std::sync::Arc;

use voxbridge::application::services::TranslationService;
use voxbridge::domain::{LanguageTag, StagePayload};
use voxbridge::infrastructure::translate::MockTranslator;

fn service(translator: Arc<MockTranslator>) -> TranslationService {
    TranslationService::new(
        translator,
        LanguageTag::new("hi-IN").unwrap(),
        LanguageTag::new("en-US").unwrap(),
    )
}

#[tokio::test]
async fn given_transcription_text_when_translating_then_payload_carries_translation() {
    let translator = Arc::new(MockTranslator::returning("hello world"));

    let payload = service(translator.clone())
        .process(Some("नमस्ते दुनिया".to_string()))
        .await;

    assert_eq!(payload, StagePayload::text("hello world"));
    assert_eq!(translator.calls(), vec!["नमस्ते दुनिया".to_string()]);
}

#[tokio::test]
async fn given_missing_transcription_text_when_translating_then_invalid_input_is_reported() {
    let translator = Arc::new(MockTranslator::passthrough());

    let payload = service(translator.clone()).process(None).await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert!(message.contains("transcriptionText"));
        }
        other => panic!("expected status payload, got {:?}", other),
    }
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn given_empty_transcription_text_when_translating_then_invalid_input_is_reported() {
    let translator = Arc::new(MockTranslator::passthrough());

    let payload = service(translator).process(Some(String::new())).await;

    assert!(matches!(
        payload,
        StagePayload::Status {
            status_code: 400,
            ..
        }
    ));
}

#[tokio::test]
async fn given_failing_translator_when_translating_then_downstream_failure_is_reported() {
    let translator = Arc::new(MockTranslator::failing("service unavailable"));

    let payload = service(translator)
        .process(Some("some text".to_string()))
        .await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 502);
            assert!(message.contains("service unavailable"));
        }
        other => panic!("expected status payload, got {:?}", other),
    }
}
