mod completion_poller;
mod job_submitter;
mod stage_error;
mod synthesis_service;
mod transcript_fetcher;
mod transcription_service;
mod translation_service;

pub use completion_poller::{CompletionPoller, PollBudget, PollOutcome};
pub use job_submitter::JobSubmitter;
pub use stage_error::StageError;
pub use synthesis_service::SynthesisService;
pub use transcript_fetcher::TranscriptFetcher;
pub use transcription_service::TranscriptionService;
pub use translation_service::TranslationService;
