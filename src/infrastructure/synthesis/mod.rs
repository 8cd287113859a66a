mod http_synthesizer;
mod mock_synthesizer;

pub use http_synthesizer::HttpSynthesizer;
pub use mock_synthesizer::MockSynthesizer;
