use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::StageError;
use crate::domain::{StagePayload, StorageLocation};
use crate::presentation::state::AppState;

/// Object-store creation notification that triggers stage 1.
#[derive(Debug, Deserialize)]
pub struct ObjectCreatedEvent {
    pub bucket: Option<String>,
    pub key: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum TranscribeResponse {
    Success {
        #[serde(rename = "transcriptionText")]
        transcription_text: String,
    },
    Status {
        #[serde(rename = "statusCode")]
        status_code: u16,
        body: String,
    },
}

#[tracing::instrument(skip(state, event))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Json(event): Json<ObjectCreatedEvent>,
) -> Response {
    let source = match (event.bucket, event.key) {
        (Some(bucket), Some(key)) if !bucket.is_empty() && !key.is_empty() => {
            StorageLocation::new(bucket, key)
        }
        _ => {
            tracing::warn!("Notification missing bucket or key");
            let err =
                StageError::InvalidInput("expected 'bucket' and 'key' in the event".to_string());
            return payload_response(StagePayload::from(err));
        }
    };

    tracing::info!(source = %source, "Received object-created notification");

    payload_response(state.transcription.process(source).await)
}

fn payload_response(payload: StagePayload) -> Response {
    match payload {
        StagePayload::Text(text) => (
            StatusCode::OK,
            Json(TranscribeResponse::Success {
                transcription_text: text,
            }),
        )
            .into_response(),
        StagePayload::Status {
            status_code,
            message,
        } => (
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(TranscribeResponse::Status {
                status_code,
                body: message,
            }),
        )
            .into_response(),
    }
}
