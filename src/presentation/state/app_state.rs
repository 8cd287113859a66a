use std::sync::Arc;

use crate::application::services::{SynthesisService, TranscriptionService, TranslationService};

/// Shared handles for the three stage services. Stages hold no mutable
/// in-process state, so cloning per request is just reference counting.
#[derive(Clone)]
pub struct AppState {
    pub transcription: Arc<TranscriptionService>,
    pub translation: Arc<TranslationService>,
    pub synthesis: Arc<SynthesisService>,
}
