use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::StorageLocation;

use super::StageError;

/// Shape of the transcript artifact the transcription service writes to the
/// output location. Only the fields the pipeline consumes are declared; a
/// document that does not match fails with a typed parse error.
#[derive(Deserialize)]
struct TranscriptDocument {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    transcripts: Vec<TranscriptSegment>,
}

#[derive(Deserialize)]
struct TranscriptSegment {
    transcript: String,
}

/// Retrieves a completed job's artifact and decodes it into the pipeline's
/// text payload. Only called after the poller reports completion, so a missing
/// artifact is an inconsistency, not a pending state.
pub struct TranscriptFetcher {
    store: Arc<dyn MediaStore>,
}

impl TranscriptFetcher {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    pub async fn fetch(&self, location: &StorageLocation) -> Result<String, StageError> {
        let data = self.store.get_object(location).await.map_err(|e| match e {
            MediaStoreError::NotFound(_) => {
                StageError::FetchFailed(format!("transcript artifact missing at {location}"))
            }
            other => StageError::FetchFailed(format!("transcript artifact unreadable: {other}")),
        })?;

        let document: TranscriptDocument = serde_json::from_slice(&data)
            .map_err(|e| StageError::FetchFailed(format!("transcript document malformed: {e}")))?;

        let text = document
            .results
            .transcripts
            .iter()
            .map(|segment| segment.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!(location = %location, chars = text.len(), "Transcript retrieved");

        Ok(text)
    }
}
