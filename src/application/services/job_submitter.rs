use std::sync::Arc;

use crate::application::ports::{MediaStore, TranscriptionClient};
use crate::domain::{LanguageTag, StorageLocation, TranscriptionJob};

use super::StageError;

/// Registers one asynchronous transcription job per pipeline invocation.
/// Keeps no state beyond the returned job; retry policy belongs to the caller.
pub struct JobSubmitter {
    client: Arc<dyn TranscriptionClient>,
    store: Arc<dyn MediaStore>,
    output_bucket: String,
}

impl JobSubmitter {
    pub fn new(
        client: Arc<dyn TranscriptionClient>,
        store: Arc<dyn MediaStore>,
        output_bucket: String,
    ) -> Self {
        Self {
            client,
            store,
            output_bucket,
        }
    }

    pub async fn submit(
        &self,
        source: &StorageLocation,
        language: &LanguageTag,
    ) -> Result<TranscriptionJob, StageError> {
        let size = self
            .store
            .head(source)
            .await
            .map_err(|e| StageError::SubmissionFailed(format!("source media not available: {e}")))?;
        tracing::debug!(media = %source, bytes = size, "Source media located");

        let output_key = format!("{}.json", source.file_stem());
        let output = StorageLocation::new(self.output_bucket.clone(), output_key);
        let job = TranscriptionJob::new(source.clone(), language.clone(), output);

        self.client
            .start_job(&job)
            .await
            .map_err(|e| StageError::SubmissionFailed(e.to_string()))?;

        tracing::info!(
            job_id = %job.id.as_uuid(),
            media = %job.media,
            output = %job.output,
            language = %job.language,
            "Transcription job registered"
        );

        Ok(job)
    }
}
