use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxbridge::application::ports::{Translator, TranslatorError};
use voxbridge::domain::LanguageTag;
use voxbridge::infrastructure::translate::HttpTranslator;

async fn start_mock_translate_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate",
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

fn hindi() -> LanguageTag {
    LanguageTag::new("hi-IN").unwrap()
}

fn english() -> LanguageTag {
    LanguageTag::new("en-US").unwrap()
}

#[tokio::test]
async fn given_valid_text_when_translating_then_translated_text_is_returned() {
    let (base_url, shutdown_tx) =
        start_mock_translate_server(200, r#"{"TranslatedText": "hello world"}"#).await;
    let translator = HttpTranslator::new(&base_url, "test-key");

    let result = translator
        .translate("नमस्ते दुनिया", &hindi(), &english())
        .await;

    assert_eq!(result.unwrap(), "hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_translating_then_api_request_failed_is_returned() {
    let (base_url, shutdown_tx) =
        start_mock_translate_server(500, r#"{"message": "internal error"}"#).await;
    let translator = HttpTranslator::new(&base_url, "test-key");

    let result = translator.translate("text", &hindi(), &english()).await;

    assert!(matches!(result, Err(TranslatorError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_response_body_when_translating_then_invalid_response_is_returned() {
    let (base_url, shutdown_tx) = start_mock_translate_server(200, "not json").await;
    let translator = HttpTranslator::new(&base_url, "test-key");

    let result = translator.translate("text", &hindi(), &english()).await;

    assert!(matches!(result, Err(TranslatorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
