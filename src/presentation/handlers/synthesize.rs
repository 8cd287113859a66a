use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::StagePayload;
use crate::presentation::state::AppState;

/// Stage 3 input: the payload shape stage 2 hands off.
#[derive(Debug, Deserialize)]
pub struct SynthesizeStageRequest {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

/// Stage 3 is terminal: success and failure share the status shape, the
/// primary effect being the audio artifact in the object store.
#[derive(Serialize)]
struct SynthesizeStageResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    body: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn synthesize_handler(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeStageRequest>,
) -> Response {
    let payload = state.synthesis.process(request.translated_text).await;

    match payload {
        StagePayload::Status {
            status_code,
            message,
        } => (
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(SynthesizeStageResponse {
                status_code,
                body: message,
            }),
        )
            .into_response(),
        // The synthesis service only emits the status shape.
        StagePayload::Text(text) => (
            StatusCode::OK,
            Json(SynthesizeStageResponse {
                status_code: 200,
                body: text,
            }),
        )
            .into_response(),
    }
}
