use async_trait::async_trait;

use crate::domain::{JobId, JobStatus, StorageLocation, TranscriptionJob};

/// Current view of one job in the external transcription registry.
#[derive(Debug, Clone)]
pub struct JobStatusReport {
    pub status: JobStatus,
    pub result_location: Option<StorageLocation>,
    pub failure_reason: Option<String>,
}

/// External transcription service: registers long-running jobs and answers
/// status queries. The registry owns all job state; callers keep nothing but
/// the job identifier between calls.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionClientError>;

    async fn job_status(&self, id: &JobId) -> Result<JobStatusReport, TranscriptionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionClientError {
    #[error("job registration rejected: {0}")]
    RegistrationRejected(String),
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
    #[error("unknown job: {0}")]
    UnknownJob(String),
}
