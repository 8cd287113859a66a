use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{JobStatusReport, TranscriptionClient, TranscriptionClientError};
use crate::domain::{JobId, TranscriptionJob};

/// Scripted transcription registry for tests: answers status queries from a
/// fixed sequence of reports (the last report repeats once the script runs
/// out) and records every registered job.
pub struct MockTranscribeClient {
    reports: Mutex<VecDeque<JobStatusReport>>,
    started: Mutex<Vec<TranscriptionJob>>,
    queries: Mutex<usize>,
    rejection: Option<String>,
}

impl MockTranscribeClient {
    pub fn with_reports(reports: Vec<JobStatusReport>) -> Self {
        Self {
            reports: Mutex::new(reports.into()),
            started: Mutex::new(Vec::new()),
            queries: Mutex::new(0),
            rejection: None,
        }
    }

    /// A registry that rejects every registration attempt.
    pub fn rejecting(message: &str) -> Self {
        Self {
            reports: Mutex::new(VecDeque::new()),
            started: Mutex::new(Vec::new()),
            queries: Mutex::new(0),
            rejection: Some(message.to_string()),
        }
    }

    pub fn started_jobs(&self) -> Vec<TranscriptionJob> {
        self.started.lock().expect("started lock poisoned").clone()
    }

    pub fn status_queries(&self) -> usize {
        *self.queries.lock().expect("queries lock poisoned")
    }
}

#[async_trait]
impl TranscriptionClient for MockTranscribeClient {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionClientError> {
        if let Some(message) = &self.rejection {
            return Err(TranscriptionClientError::RegistrationRejected(
                message.clone(),
            ));
        }
        self.started
            .lock()
            .expect("started lock poisoned")
            .push(job.clone());
        Ok(())
    }

    async fn job_status(&self, id: &JobId) -> Result<JobStatusReport, TranscriptionClientError> {
        *self.queries.lock().expect("queries lock poisoned") += 1;

        let mut reports = self.reports.lock().expect("reports lock poisoned");
        let report = reports
            .pop_front()
            .ok_or_else(|| TranscriptionClientError::UnknownJob(id.as_uuid().to_string()))?;
        if reports.is_empty() {
            reports.push_back(report.clone());
        }
        Ok(report)
    }
}
