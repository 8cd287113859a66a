mod media_store;
mod speech_synthesizer;
mod transcription_client;
mod translator;

pub use media_store::{MediaStore, MediaStoreError};
pub use speech_synthesizer::{AudioFormat, SpeechSynthesizer, SynthesizerError};
pub use transcription_client::{JobStatusReport, TranscriptionClient, TranscriptionClientError};
pub use translator::{Translator, TranslatorError};
