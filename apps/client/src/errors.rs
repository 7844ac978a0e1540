use thiserror::Error;

/// Which producing operation a failure belongs to. Carried on the request
/// token so a completion arriving after a mode switch still surfaces the
/// message for the flow that actually failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Voice,
    History,
}

/// Client-level error taxonomy.
///
/// Every producer-flow error terminates at the session machine as an
/// `Error(message)` phase; nothing here is thrown past the UI boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, non-2xx status, or a malformed response body.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The platform exposes no speech-recognition capability.
    #[error("speech recognition is not available on this platform")]
    UnsupportedPlatform,

    /// The recognizer aborted with a platform error code.
    #[error("speech recognition error: {0}")]
    SpeechRecognitionFailed(String),

    /// Capture stopped with a whitespace-only transcript; no backend call
    /// is made in this case.
    #[error("no speech captured")]
    EmptyCapture,

    /// Export requested while the current result set has zero questions.
    #[error("no questions to export")]
    NothingToExport,

    /// A producing action was requested while another is still in flight.
    #[error("a request is already in flight")]
    Busy,

    /// Backend auth failure; carries the backend's message verbatim or a
    /// generic fallback.
    #[error("{0}")]
    Auth(String),
}

impl ClientError {
    /// The fixed user-facing message for this error kind, shown inline
    /// with an explicit dismiss control. Mapping lives here and nowhere
    /// else so the wording stays consistent across flows.
    pub fn user_message(&self, kind: RequestKind) -> String {
        match self {
            ClientError::RequestFailed(_) => match kind {
                RequestKind::Upload => {
                    "Failed to process your resume. Please try again.".to_string()
                }
                RequestKind::Voice => {
                    "Failed to process your voice input. Please try again.".to_string()
                }
                RequestKind::History => {
                    "Failed to load question history. Please try again.".to_string()
                }
            },
            ClientError::UnsupportedPlatform => {
                "Speech recognition is not supported in your browser.".to_string()
            }
            ClientError::SpeechRecognitionFailed(code) => {
                format!("Speech recognition error: {code}")
            }
            ClientError::EmptyCapture => "No speech detected. Please try again.".to_string(),
            ClientError::NothingToExport => {
                "No questions to export. Please generate questions first.".to_string()
            }
            ClientError::Busy => "Another request is still running. Please wait.".to_string(),
            ClientError::Auth(message) => message.clone(),
        }
    }
}
