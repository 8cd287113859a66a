use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voxbridge::application::ports::AudioFormat;
use voxbridge::application::services::{
    CompletionPoller, JobSubmitter, PollBudget, SynthesisService, TranscriptFetcher,
    TranscriptionService, TranslationService,
};
use voxbridge::domain::LanguageTag;
use voxbridge::infrastructure::observability::{init_tracing, TracingConfig};
use voxbridge::infrastructure::storage::MediaStoreFactory;
use voxbridge::infrastructure::synthesis::HttpSynthesizer;
use voxbridge::infrastructure::transcribe::HttpTranscribeClient;
use voxbridge::infrastructure::translate::HttpTranslator;
use voxbridge::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let settings = Settings::load(&environment)?;

    init_tracing(&TracingConfig::new(&settings.logging, environment.as_str()));

    let source_language =
        LanguageTag::new(settings.pipeline.source_language.as_str()).map_err(anyhow::Error::msg)?;
    let target_language =
        LanguageTag::new(settings.pipeline.target_language.as_str()).map_err(anyhow::Error::msg)?;
    let audio_format: AudioFormat = settings
        .pipeline
        .audio_format
        .parse()
        .map_err(anyhow::Error::msg)?;

    let media_store = MediaStoreFactory::create(&settings.storage)?;
    let transcribe_client = Arc::new(HttpTranscribeClient::new(
        &settings.transcribe.endpoint,
        &settings.transcribe.api_key,
    ));
    let translator = Arc::new(HttpTranslator::new(
        &settings.translate.endpoint,
        &settings.translate.api_key,
    ));
    let synthesizer = Arc::new(HttpSynthesizer::new(
        &settings.synthesis.endpoint,
        &settings.synthesis.api_key,
    ));

    let submitter = JobSubmitter::new(
        transcribe_client.clone(),
        Arc::clone(&media_store),
        settings.pipeline.output_bucket.clone(),
    );
    let budget = PollBudget::new(
        Duration::from_secs(settings.poll.interval_secs),
        Duration::from_secs(settings.poll.max_wait_secs),
    );
    let poller = CompletionPoller::new(transcribe_client, budget);
    let fetcher = TranscriptFetcher::new(Arc::clone(&media_store));

    let transcription = Arc::new(TranscriptionService::new(
        submitter,
        poller,
        fetcher,
        source_language.clone(),
    ));
    let translation = Arc::new(TranslationService::new(
        translator,
        source_language,
        target_language,
    ));
    let synthesis = Arc::new(SynthesisService::new(
        synthesizer,
        media_store,
        settings.pipeline.output_bucket.clone(),
        settings.pipeline.voice_id.clone(),
        audio_format,
    ));

    let state = AppState {
        transcription,
        translation,
        synthesis,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
