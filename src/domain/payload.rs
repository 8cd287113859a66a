/// Data handed between pipeline stages: the stage's semantic text, or a
/// status code plus human-readable message. The two shapes are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagePayload {
    Text(String),
    Status { status_code: u16, message: String },
}

impl StagePayload {
    pub fn text(text: impl Into<String>) -> Self {
        StagePayload::Text(text.into())
    }

    pub fn status(status_code: u16, message: impl Into<String>) -> Self {
        StagePayload::Status {
            status_code,
            message: message.into(),
        }
    }
}
