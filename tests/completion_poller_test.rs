use std::sync::Arc;
use std::time::Duration;

use voxbridge::application::ports::{JobStatusReport, TranscriptionClient};
use voxbridge::application::services::{CompletionPoller, PollBudget, PollOutcome};
use voxbridge::domain::{JobId, JobStatus, StorageLocation};
use voxbridge::infrastructure::transcribe::MockTranscribeClient;

fn pending(status: JobStatus) -> JobStatusReport {
    JobStatusReport {
        status,
        result_location: None,
        failure_reason: None,
    }
}

fn completed(location: StorageLocation) -> JobStatusReport {
    JobStatusReport {
        status: JobStatus::Completed,
        result_location: Some(location),
        failure_reason: None,
    }
}

fn failed(reason: &str) -> JobStatusReport {
    JobStatusReport {
        status: JobStatus::Failed,
        result_location: None,
        failure_reason: Some(reason.to_string()),
    }
}

fn poller(
    client: &Arc<MockTranscribeClient>,
    interval_secs: u64,
    max_wait_secs: u64,
) -> CompletionPoller {
    let client: Arc<dyn TranscriptionClient> = Arc::clone(client) as Arc<dyn TranscriptionClient>;
    CompletionPoller::new(
        client,
        PollBudget::new(
            Duration::from_secs(interval_secs),
            Duration::from_secs(max_wait_secs),
        ),
    )
}

#[tokio::test(start_paused = true)]
async fn given_two_pending_checks_when_job_completes_then_exits_after_two_sleeps() {
    let client = Arc::new(MockTranscribeClient::with_reports(vec![
        pending(JobStatus::InProgress),
        pending(JobStatus::InProgress),
        completed(StorageLocation::new("output-voice-bucket", "interview.json")),
    ]));
    let poller = poller(&client, 10, 180);

    let outcome = poller.wait_for_terminal(&JobId::new()).await.unwrap();

    assert!(matches!(outcome, PollOutcome::Completed { .. }));
    assert_eq!(outcome.waited(), Duration::from_secs(20));
    assert_eq!(client.status_queries(), 3);
}

#[tokio::test(start_paused = true)]
async fn given_never_terminal_job_when_budget_is_exhausted_then_times_out_after_three_sleeps() {
    let client = Arc::new(MockTranscribeClient::with_reports(vec![pending(
        JobStatus::InProgress,
    )]));
    let poller = poller(&client, 10, 30);

    let outcome = poller.wait_for_terminal(&JobId::new()).await.unwrap();

    assert!(matches!(outcome, PollOutcome::TimedOut { .. }));
    assert_eq!(outcome.waited(), Duration::from_secs(30));
    assert_eq!(client.status_queries(), 3);
}

#[tokio::test(start_paused = true)]
async fn given_failed_job_when_first_check_runs_then_exits_immediately_without_sleeping() {
    let client = Arc::new(MockTranscribeClient::with_reports(vec![failed(
        "unsupported media format",
    )]));
    let poller = poller(&client, 10, 180);

    let outcome = poller.wait_for_terminal(&JobId::new()).await.unwrap();

    match outcome {
        PollOutcome::Failed { reason, waited } => {
            assert_eq!(reason.as_deref(), Some("unsupported media format"));
            assert_eq!(waited, Duration::ZERO);
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(client.status_queries(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_freshly_submitted_status_when_polling_then_it_is_treated_as_pending() {
    let client = Arc::new(MockTranscribeClient::with_reports(vec![
        pending(JobStatus::Submitted),
        completed(StorageLocation::new("output-voice-bucket", "interview.json")),
    ]));
    let poller = poller(&client, 10, 180);

    let outcome = poller.wait_for_terminal(&JobId::new()).await.unwrap();

    assert!(matches!(outcome, PollOutcome::Completed { .. }));
    assert_eq!(outcome.waited(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn given_budget_not_aligned_with_interval_when_timing_out_then_overrun_is_at_most_one_interval() {
    let client = Arc::new(MockTranscribeClient::with_reports(vec![pending(
        JobStatus::InProgress,
    )]));
    let interval = Duration::from_secs(10);
    let max_wait = Duration::from_secs(25);
    let poller = poller(&client, 10, 25);

    let outcome = poller.wait_for_terminal(&JobId::new()).await.unwrap();

    let waited = outcome.waited();
    assert!(waited <= max_wait + interval);
    assert_eq!(waited.as_secs() % interval.as_secs(), 0);
    assert_eq!(waited, Duration::from_secs(30));
}
