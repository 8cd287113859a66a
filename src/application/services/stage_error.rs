use std::time::Duration;

use crate::domain::StagePayload;

/// Orchestration-level failure taxonomy shared by all three stages. Every
/// variant is caught at the stage boundary and converted into the failure
/// shape of the stage payload; nothing propagates past a handler.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("transcription timed out after {}s", .waited.as_secs())]
    TimedOut { waited: Duration },
    #[error("transcript fetch failed: {0}")]
    FetchFailed(String),
    #[error("downstream call failed: {0}")]
    DownstreamCallFailed(String),
}

impl StageError {
    /// Status code reported in the stage's failure payload. A timeout is kept
    /// distinguishable from a terminal job failure so callers can decide
    /// between resubmitting and treating the job as permanently failed.
    pub fn status_code(&self) -> u16 {
        match self {
            StageError::InvalidInput(_) => 400,
            StageError::SubmissionFailed(_) => 502,
            StageError::TranscriptionFailed(_) => 500,
            StageError::TimedOut { .. } => 504,
            StageError::FetchFailed(_) => 500,
            StageError::DownstreamCallFailed(_) => 502,
        }
    }
}

impl From<StageError> for StagePayload {
    fn from(err: StageError) -> Self {
        StagePayload::status(err.status_code(), err.to_string())
    }
}
