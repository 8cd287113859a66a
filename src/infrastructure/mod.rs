pub mod observability;
pub mod storage;
pub mod synthesis;
pub mod transcribe;
pub mod translate;
