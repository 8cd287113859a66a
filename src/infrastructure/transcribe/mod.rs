mod http_transcribe_client;
mod mock_transcribe_client;

pub use http_transcribe_client::HttpTranscribeClient;
pub use mock_transcribe_client::MockTranscribeClient;
