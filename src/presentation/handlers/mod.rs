mod health;
mod synthesize;
mod transcribe;
mod translate;

pub use health::health_handler;
pub use synthesize::synthesize_handler;
pub use transcribe::transcribe_handler;
pub use translate::translate_handler;
