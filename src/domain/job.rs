use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{JobStatus, LanguageTag, StorageLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// One asynchronous transcription job, owned by a single pipeline invocation.
/// The status field reflects the last view read from the external registry;
/// the job is never mutated locally after submission.
#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: JobId,
    pub media: StorageLocation,
    pub language: LanguageTag,
    pub output: StorageLocation,
    pub status: JobStatus,
    pub result: Option<StorageLocation>,
    pub created_at: DateTime<Utc>,
}

impl TranscriptionJob {
    pub fn new(media: StorageLocation, language: LanguageTag, output: StorageLocation) -> Self {
        Self {
            id: JobId::new(),
            media,
            language,
            output,
            status: JobStatus::Submitted,
            result: None,
            created_at: Utc::now(),
        }
    }
}
