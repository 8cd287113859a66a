use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{JobStatusReport, TranscriptionClient, TranscriptionClientError};
use crate::domain::{JobId, JobStatus, StorageLocation, TranscriptionJob};

/// Adapter for a transcription registry exposing a REST surface shaped like
/// the common cloud transcription APIs: jobs are started by name and queried
/// until terminal, with the artifact written to a declared output location.
pub struct HttpTranscribeClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTranscribeClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct StartJobRequest<'a> {
    transcription_job_name: String,
    language_code: &'a str,
    media: MediaRef,
    output_bucket_name: &'a str,
    output_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct MediaRef {
    media_file_uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetJobResponse {
    transcription_job: JobDescription,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct JobDescription {
    transcription_job_status: String,
    transcript: Option<TranscriptRef>,
    failure_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranscriptRef {
    transcript_file_uri: Option<String>,
}

#[async_trait]
impl TranscriptionClient for HttpTranscribeClient {
    async fn start_job(&self, job: &TranscriptionJob) -> Result<(), TranscriptionClientError> {
        let url = format!("{}/jobs", self.endpoint);
        let request = StartJobRequest {
            transcription_job_name: job.id.as_uuid().to_string(),
            language_code: job.language.as_str(),
            media: MediaRef {
                media_file_uri: job.media.uri(),
            },
            output_bucket_name: job.output.bucket(),
            output_key: job.output.key(),
        };

        tracing::debug!(url = %url, job_id = %job.id.as_uuid(), "Registering transcription job");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionClientError::RequestFailed(format!("start job: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionClientError::RegistrationRejected(format!(
                "status {status}: {body}"
            )));
        }

        Ok(())
    }

    async fn job_status(&self, id: &JobId) -> Result<JobStatusReport, TranscriptionClientError> {
        let url = format!("{}/jobs/{}", self.endpoint, id.as_uuid());

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionClientError::RequestFailed(format!("job status: {e}")))?;

        if response.status().as_u16() == 404 {
            return Err(TranscriptionClientError::UnknownJob(id.as_uuid().to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionClientError::RequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let body: GetJobResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionClientError::InvalidResponse(format!("parse response: {e}")))?;
        let description = body.transcription_job;

        let status: JobStatus = description
            .transcription_job_status
            .parse()
            .map_err(TranscriptionClientError::InvalidResponse)?;

        let result_location = match description
            .transcript
            .and_then(|t| t.transcript_file_uri)
        {
            Some(uri) => Some(
                StorageLocation::from_uri(&uri)
                    .map_err(TranscriptionClientError::InvalidResponse)?,
            ),
            None => None,
        };

        Ok(JobStatusReport {
            status,
            result_location,
            failure_reason: description.failure_reason,
        })
    }
}
