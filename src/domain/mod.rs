mod job;
mod job_status;
mod language;
mod payload;
mod storage_location;

pub use job::{JobId, TranscriptionJob};
pub use job_status::JobStatus;
pub use language::LanguageTag;
pub use payload::StagePayload;
pub use storage_location::StorageLocation;
