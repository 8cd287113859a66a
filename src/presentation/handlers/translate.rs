use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::StagePayload;
use crate::presentation::state::AppState;

/// Stage 2 input: the payload shape stage 1 hands off.
#[derive(Debug, Deserialize)]
pub struct TranslateStageRequest {
    #[serde(rename = "transcriptionText")]
    pub transcription_text: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum TranslateStageResponse {
    Success {
        #[serde(rename = "translatedText")]
        translated_text: String,
    },
    Status {
        #[serde(rename = "statusCode")]
        status_code: u16,
        body: String,
    },
}

#[tracing::instrument(skip(state, request))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(request): Json<TranslateStageRequest>,
) -> Response {
    let payload = state.translation.process(request.transcription_text).await;

    match payload {
        StagePayload::Text(text) => (
            StatusCode::OK,
            Json(TranslateStageResponse::Success {
                translated_text: text,
            }),
        )
            .into_response(),
        StagePayload::Status {
            status_code,
            message,
        } => (
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(TranslateStageResponse::Status {
                status_code,
                body: message,
            }),
        )
            .into_response(),
    }
}
