use std::sync::Arc;
use std::time::Duration;

use voxbridge::application::ports::JobStatusReport;
use voxbridge::application::services::{
    CompletionPoller, JobSubmitter, PollBudget, TranscriptFetcher, TranscriptionService,
};
use voxbridge::domain::{JobStatus, LanguageTag, StagePayload, StorageLocation};
use voxbridge::infrastructure::storage::MockMediaStore;
use voxbridge::infrastructure::transcribe::MockTranscribeClient;

const OUTPUT_BUCKET: &str = "output-voice-bucket";

fn service(
    client: Arc<MockTranscribeClient>,
    store: Arc<MockMediaStore>,
) -> TranscriptionService {
    let submitter = JobSubmitter::new(client.clone(), store.clone(), OUTPUT_BUCKET.to_string());
    let poller = CompletionPoller::new(
        client,
        PollBudget::new(Duration::from_secs(10), Duration::from_secs(180)),
    );
    let fetcher = TranscriptFetcher::new(store);
    TranscriptionService::new(submitter, poller, fetcher, LanguageTag::new("hi-IN").unwrap())
}

fn transcript_document(text: &str) -> Vec<u8> {
    format!(
        r#"{{"results":{{"transcripts":[{{"transcript":"{}"}}],"items":[]}}}}"#,
        text
    )
    .into_bytes()
}

#[tokio::test(start_paused = true)]
async fn given_source_text_when_transcription_mock_returns_it_verbatim_then_payload_carries_it_unmodified(
) {
    let source_text = "यह एक परीक्षण वाक्य है";
    let store = Arc::new(MockMediaStore::new());
    let source = StorageLocation::new("input-voice-bucket", "uploads/interview.mp3");
    store.insert(&source, &b"fake audio bytes"[..]);

    let result_location = StorageLocation::new(OUTPUT_BUCKET, "interview.json");
    store.insert(&result_location, transcript_document(source_text));

    let client = Arc::new(MockTranscribeClient::with_reports(vec![
        JobStatusReport {
            status: JobStatus::InProgress,
            result_location: None,
            failure_reason: None,
        },
        JobStatusReport {
            status: JobStatus::Completed,
            result_location: Some(result_location),
            failure_reason: None,
        },
    ]));

    let payload = service(client, store).process(source).await;

    assert_eq!(payload, StagePayload::text(source_text));
}

#[tokio::test(start_paused = true)]
async fn given_no_reported_result_location_when_job_completes_then_declared_output_is_fetched() {
    let store = Arc::new(MockMediaStore::new());
    let source = StorageLocation::new("input-voice-bucket", "uploads/greeting.wav");
    store.insert(&source, &b"fake audio bytes"[..]);

    // Artifact only exists at the location declared at submission time.
    let declared_output = StorageLocation::new(OUTPUT_BUCKET, "greeting.json");
    store.insert(&declared_output, transcript_document("hello there"));

    let client = Arc::new(MockTranscribeClient::with_reports(vec![JobStatusReport {
        status: JobStatus::Completed,
        result_location: None,
        failure_reason: None,
    }]));

    let payload = service(client, store).process(source).await;

    assert_eq!(payload, StagePayload::text("hello there"));
}

#[tokio::test(start_paused = true)]
async fn given_terminal_failed_status_when_processing_then_payload_reports_transcription_failure() {
    let store = Arc::new(MockMediaStore::new());
    let source = StorageLocation::new("input-voice-bucket", "uploads/interview.mp3");
    store.insert(&source, &b"fake audio bytes"[..]);

    let client = Arc::new(MockTranscribeClient::with_reports(vec![JobStatusReport {
        status: JobStatus::Failed,
        result_location: None,
        failure_reason: Some("audio channel unsupported".to_string()),
    }]));

    let payload = service(client, store).process(source).await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert!(message.contains("audio channel unsupported"));
        }
        other => panic!("expected status payload, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn given_never_terminal_job_when_processing_then_timeout_is_distinguishable_from_failure() {
    let store = Arc::new(MockMediaStore::new());
    let source = StorageLocation::new("input-voice-bucket", "uploads/interview.mp3");
    store.insert(&source, &b"fake audio bytes"[..]);

    let client = Arc::new(MockTranscribeClient::with_reports(vec![JobStatusReport {
        status: JobStatus::InProgress,
        result_location: None,
        failure_reason: None,
    }]));

    let payload = service(client, store).process(source).await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 504);
            assert!(message.contains("timed out"));
        }
        other => panic!("expected status payload, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn given_completed_job_with_missing_artifact_when_processing_then_payload_reports_fetch_failure(
) {
    let store = Arc::new(MockMediaStore::new());
    let source = StorageLocation::new("input-voice-bucket", "uploads/interview.mp3");
    store.insert(&source, &b"fake audio bytes"[..]);

    let client = Arc::new(MockTranscribeClient::with_reports(vec![JobStatusReport {
        status: JobStatus::Completed,
        result_location: Some(StorageLocation::new(OUTPUT_BUCKET, "interview.json")),
        failure_reason: None,
    }]));

    let payload = service(client, store).process(source).await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert!(message.contains("fetch failed"));
        }
        other => panic!("expected status payload, got {:?}", other),
    }
}
