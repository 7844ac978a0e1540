//! Remote Service client — the single point of entry for all backend calls.
//!
//! ARCHITECTURAL RULE: no other module may touch the backend origin
//! directly. The four producer endpoints and the auth endpoints all go
//! through this module, and every outcome is normalized into the
//! `ClientError` taxonomy before it reaches the session machine.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

pub mod auth;

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{HistoryEntry, ResultSet};

const UPLOAD_RESUME_PATH: &str = "/api/upload-resume-public";
const PROCESS_VOICE_PATH: &str = "/api/process-voice-public";
const QUESTION_HISTORY_PATH: &str = "/api/question-history-public";

/// The contract a session coordinator needs from the backend: the two
/// producing operations plus the on-demand history fetch. `RemoteClient`
/// is the production implementation; tests swap in a scripted double.
#[async_trait]
pub trait QuestionBackend: Send + Sync {
    async fn upload_resume(&self, filename: &str, bytes: Vec<u8>)
        -> Result<ResultSet, ClientError>;
    async fn submit_transcript(&self, transcription: &str) -> Result<ResultSet, ClientError>;
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError>;
}

/// HTTP client against the fixed backend origin.
///
/// One `reqwest::Client` with a cookie store — the backend keeps session
/// continuity in an HTTP-only cookie, so the same jar must back both the
/// producer calls and the auth calls.
#[derive(Clone)]
pub struct RemoteClient {
    http: Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .cookie_store(true)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.api_base_url.clone(),
        }
    }

    pub(crate) fn http(&self) -> Client {
        self.http.clone()
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST the résumé as a multipart form (field name `file`) and parse
    /// the returned result set. The payload must be non-empty; type and
    /// size limits are enforced by the backend, not here.
    pub async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ResultSet, ClientError> {
        if bytes.is_empty() {
            return Err(ClientError::RequestFailed("empty file".to_string()));
        }

        debug!("Uploading resume {filename} ({} bytes)", bytes.len());

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint(UPLOAD_RESUME_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(request_failed)?;

        read_result_set(response).await
    }

    /// POST a finalized speech transcript as JSON and parse the returned
    /// result set.
    pub async fn submit_transcript(&self, transcription: &str) -> Result<ResultSet, ClientError> {
        debug!("Submitting transcript ({} chars)", transcription.len());

        let response = self
            .http
            .post(self.endpoint(PROCESS_VOICE_PATH))
            .json(&serde_json::json!({ "transcription": transcription }))
            .send()
            .await
            .map_err(request_failed)?;

        read_result_set(response).await
    }

    /// GET the recent generation history. A 2xx body that is not a JSON
    /// array yields an empty list rather than an error; individual
    /// entries that fail to parse are skipped.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(QUESTION_HISTORY_PATH))
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_failed(status, response).await);
        }

        let body: Value = response.json().await.map_err(request_failed)?;

        let Value::Array(items) = body else {
            warn!("History endpoint returned a non-array body; showing an empty history");
            return Ok(Vec::new());
        };

        let entries = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<HistoryEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping malformed history entry: {e}");
                    None
                }
            })
            .collect();

        Ok(entries)
    }
}

#[async_trait]
impl QuestionBackend for RemoteClient {
    async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ResultSet, ClientError> {
        RemoteClient::upload_resume(self, filename, bytes).await
    }

    async fn submit_transcript(&self, transcription: &str) -> Result<ResultSet, ClientError> {
        RemoteClient::submit_transcript(self, transcription).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        RemoteClient::fetch_history(self).await
    }
}

/// Resolves a producer response: 2xx with a parseable `{questions,
/// skills}` body, anything else is `RequestFailed`.
async fn read_result_set(response: Response) -> Result<ResultSet, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_failed(status, response).await);
    }

    let results: ResultSet = response.json().await.map_err(request_failed)?;

    debug!(
        "Generation succeeded: {} questions, {} skills",
        results.questions.len(),
        results.skills.len()
    );

    Ok(results)
}

async fn status_failed(status: StatusCode, response: Response) -> ClientError {
    let body = response.text().await.unwrap_or_default();
    warn!("Backend returned {status}: {body}");
    ClientError::RequestFailed(format!("status {status}"))
}

fn request_failed(e: reqwest::Error) -> ClientError {
    ClientError::RequestFailed(e.to_string())
}
