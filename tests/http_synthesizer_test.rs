use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use base64::{engine::general_purpose, Engine as _};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxbridge::application::ports::{AudioFormat, SpeechSynthesizer, SynthesizerError};
use voxbridge::infrastructure::synthesis::HttpSynthesizer;

async fn start_mock_synthesis_server(
    response_status: u16,
    response_body: String,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/synthesize",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_base64_audio_response_when_synthesizing_then_decoded_bytes_are_returned() {
    let audio: &[u8] = b"ID3\x03fake mp3 frames";
    let body = format!(
        r#"{{"AudioStream": "{}"}}"#,
        general_purpose::STANDARD.encode(audio)
    );
    let (base_url, shutdown_tx) = start_mock_synthesis_server(200, body).await;
    let synthesizer = HttpSynthesizer::new(&base_url, "test-key");

    let result = synthesizer
        .synthesize("hello world", "Joanna", AudioFormat::Mp3)
        .await;

    assert_eq!(result.unwrap().as_ref(), audio);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_invalid_base64_payload_when_synthesizing_then_invalid_response_is_returned() {
    let body = r#"{"AudioStream": "not base64 at all!!!"}"#.to_string();
    let (base_url, shutdown_tx) = start_mock_synthesis_server(200, body).await;
    let synthesizer = HttpSynthesizer::new(&base_url, "test-key");

    let result = synthesizer
        .synthesize("hello", "Joanna", AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(SynthesizerError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_synthesizing_then_api_request_failed_is_returned() {
    let body = r#"{"message": "voice not available"}"#.to_string();
    let (base_url, shutdown_tx) = start_mock_synthesis_server(400, body).await;
    let synthesizer = HttpSynthesizer::new(&base_url, "test-key");

    let result = synthesizer
        .synthesize("hello", "Ivy", AudioFormat::OggVorbis)
        .await;

    match result {
        Err(SynthesizerError::ApiRequestFailed(message)) => {
            assert!(message.contains("voice not available"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}
