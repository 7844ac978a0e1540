//! Capture controller — one start-to-stop lifetime of speech recognition.
//!
//! Accumulation contract: each final event appends its text plus a
//! trailing separator to the retained transcript; each interim event
//! fully replaces the previous interim display and is never retained
//! across events.

use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::speech::{RecognitionEvent, SpeechCaptureProvider, SpeechRecognizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing,
    Stopped,
}

/// Exclusive owner of the capture session. The session machine never
/// touches the transcript until `stop` hands the finalized text over.
pub struct CaptureController {
    provider: Box<dyn SpeechCaptureProvider>,
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    state: CaptureState,
    retained: String,
    interim: String,
}

impl CaptureController {
    pub fn new(provider: Box<dyn SpeechCaptureProvider>) -> Self {
        Self {
            provider,
            recognizer: None,
            state: CaptureState::Idle,
            retained: String::new(),
            interim: String::new(),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// Retained transcript plus the current interim text, for live display.
    pub fn displayed_transcript(&self) -> String {
        format!("{}{}", self.retained, self.interim)
    }

    /// Begins a capture session. Fails with `UnsupportedPlatform` when the
    /// provider has no recognizer, leaving the controller Idle. Starting
    /// while already capturing is a no-op.
    pub fn start(&mut self) -> Result<(), ClientError> {
        if self.state == CaptureState::Capturing {
            debug!("Capture already active; ignoring start");
            return Ok(());
        }

        let Some(mut recognizer) = self.provider.recognizer() else {
            return Err(ClientError::UnsupportedPlatform);
        };

        recognizer.start();
        debug!("Capture started via {}", recognizer.display_name());

        self.recognizer = Some(recognizer);
        self.retained.clear();
        self.interim.clear();
        self.state = CaptureState::Capturing;
        Ok(())
    }

    /// Applies one recognition event. Events arriving outside an active
    /// session (the engine may flush after stop) are dropped.
    pub fn on_event(&mut self, event: RecognitionEvent) {
        if self.state != CaptureState::Capturing {
            debug!("Dropping recognition event outside an active session");
            return;
        }

        if event.is_final {
            self.retained.push_str(&event.text);
            self.retained.push(' ');
            self.interim.clear();
        } else {
            self.interim = event.text;
        }
    }

    /// Recognizer-reported error: aborts the session, discards the
    /// in-progress interim text, keeps previously finalized text.
    pub fn on_error(&mut self, code: &str) -> ClientError {
        warn!("Speech recognition error: {code}");
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.stop();
        }
        self.recognizer = None;
        self.interim.clear();
        self.state = CaptureState::Idle;
        ClientError::SpeechRecognitionFailed(code.to_string())
    }

    /// User-initiated stop: finalizes the transcript. A whitespace-only
    /// transcript yields `EmptyCapture`, and the caller must not hit the
    /// backend in that case.
    pub fn stop(&mut self) -> Result<String, ClientError> {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.stop();
        }
        self.recognizer = None;
        self.interim.clear();
        self.state = CaptureState::Stopped;

        if self.retained.trim().is_empty() {
            return Err(ClientError::EmptyCapture);
        }

        Ok(self.retained.clone())
    }
}
