mod http_translator;
mod mock_translator;

pub use http_translator::HttpTranslator;
pub use mock_translator::MockTranslator;
