use crate::domain::{LanguageTag, StagePayload, StorageLocation};

use super::{CompletionPoller, JobSubmitter, PollOutcome, StageError, TranscriptFetcher};

/// Stage 1 of the pipeline: submit the transcription job, poll it to a
/// terminal state, fetch the artifact, and hand the text to the next stage.
/// Strictly sequential; exactly one job per invocation.
pub struct TranscriptionService {
    submitter: JobSubmitter,
    poller: CompletionPoller,
    fetcher: TranscriptFetcher,
    source_language: LanguageTag,
}

impl TranscriptionService {
    pub fn new(
        submitter: JobSubmitter,
        poller: CompletionPoller,
        fetcher: TranscriptFetcher,
        source_language: LanguageTag,
    ) -> Self {
        Self {
            submitter,
            poller,
            fetcher,
            source_language,
        }
    }

    /// Runs the whole stage for one object-created notification. Errors never
    /// escape; they come back as the failure shape of the payload.
    pub async fn process(&self, source: StorageLocation) -> StagePayload {
        match self.run(source).await {
            Ok(text) => StagePayload::text(text),
            Err(err) => {
                tracing::error!(error = %err, "Transcription stage failed");
                StagePayload::from(err)
            }
        }
    }

    async fn run(&self, source: StorageLocation) -> Result<String, StageError> {
        let job = self.submitter.submit(&source, &self.source_language).await?;

        let outcome = self
            .poller
            .wait_for_terminal(&job.id)
            .await
            .map_err(|e| StageError::TranscriptionFailed(format!("status query failed: {e}")))?;

        match outcome {
            PollOutcome::Completed { result, waited } => {
                tracing::info!(
                    job_id = %job.id.as_uuid(),
                    waited_s = waited.as_secs(),
                    "Transcription job completed"
                );
                // The registry usually reports where it wrote the artifact;
                // fall back to the location the job declared at submission.
                let location = result.unwrap_or_else(|| job.output.clone());
                self.fetcher.fetch(&location).await
            }
            PollOutcome::Failed { reason, .. } => Err(StageError::TranscriptionFailed(
                reason.unwrap_or_else(|| "job reached terminal FAILED status".to_string()),
            )),
            PollOutcome::TimedOut { waited } => Err(StageError::TimedOut { waited }),
        }
    }
}
