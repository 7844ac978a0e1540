//! Session coordinator — wires the four input→result flows (upload,
//! capture, history, export) into the one shared phase machine.
//!
//! Single-threaded and cooperative: the only suspension points are the
//! awaited backend calls. Mode switches and error dismissal interleave
//! freely with an outstanding request; in-flight requests cannot be
//! cancelled.

use tracing::debug;

use crate::errors::{ClientError, RequestKind};
use crate::export::{export_document, ExportDocument};
use crate::models::{HistoryEntry, InteractionMode, ResultSet};
use crate::remote::QuestionBackend;
use crate::session::{Phase, SessionMachine};
use crate::speech::{CaptureController, RecognitionEvent, SpeechCaptureProvider};

/// One user-facing session: shared phase state, the armed input mode,
/// the capture controller, and the fetched history view.
///
/// Flow methods return `Ok(())` whenever the outcome landed in the phase
/// machine (including failures — those become the Error phase). The only
/// surfaced `Err` is `Busy`, which leaves the phase untouched so the
/// in-flight request keeps its claim on the result view.
pub struct InteractionSession<B: QuestionBackend> {
    machine: SessionMachine,
    capture: CaptureController,
    backend: B,
    history: Vec<HistoryEntry>,
}

impl<B: QuestionBackend> InteractionSession<B> {
    pub fn new(backend: B, provider: Box<dyn SpeechCaptureProvider>) -> Self {
        Self {
            machine: SessionMachine::new(),
            capture: CaptureController::new(provider),
            backend,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        self.machine.phase()
    }

    pub fn mode(&self) -> InteractionMode {
        self.machine.mode()
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.machine.set_mode(mode);
    }

    pub fn dismiss_error(&mut self) {
        self.machine.dismiss_error();
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_capturing()
    }

    /// Live transcript for display while capturing.
    pub fn displayed_transcript(&self) -> String {
        self.capture.displayed_transcript()
    }

    // ── Resume upload flow ──────────────────────────────────────────────

    /// Uploads a résumé (picked or dropped) and replaces the result view
    /// with the response.
    pub async fn submit_resume(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ClientError> {
        let token = self.machine.begin(RequestKind::Upload)?;
        let outcome = self.backend.upload_resume(filename, bytes).await;
        self.machine.complete(token, outcome);
        Ok(())
    }

    // ── Voice capture flow ──────────────────────────────────────────────

    /// Starts a capture session. Clears a visible error first (the record
    /// button doubles as a retry affordance), and surfaces
    /// `UnsupportedPlatform` as the Error phase without a backend call.
    pub fn start_capture(&mut self) {
        self.machine.dismiss_error();
        if let Err(e) = self.capture.start() {
            self.machine.fail_local(&e);
        }
    }

    /// Passes one platform recognition event through to the controller.
    pub fn capture_event(&mut self, event: RecognitionEvent) {
        self.capture.on_event(event);
    }

    /// Recognizer-reported failure: aborts the capture session and shows
    /// the error inline.
    pub fn capture_error(&mut self, code: &str) {
        let err = self.capture.on_error(code);
        self.machine.fail_local(&err);
    }

    /// Stops capture and submits the finalized transcript. An empty
    /// capture becomes the fixed inline error and never reaches the
    /// backend.
    pub async fn finish_capture(&mut self) -> Result<(), ClientError> {
        let transcript = match self.capture.stop() {
            Ok(text) => text,
            Err(e) => {
                debug!("Capture ended without usable speech");
                self.machine.fail_local(&e);
                return Ok(());
            }
        };

        let token = self.machine.begin(RequestKind::Voice)?;
        let outcome = self.backend.submit_transcript(&transcript).await;
        self.machine.complete(token, outcome);
        Ok(())
    }

    // ── History flow ────────────────────────────────────────────────────

    /// Fetches the recent generation history for display. Success leaves
    /// the result view idle; the history list is view state of its own
    /// and never replaces a result set.
    pub async fn load_history(&mut self) -> Result<(), ClientError> {
        let token = self.machine.begin(RequestKind::History)?;
        match self.backend.fetch_history().await {
            Ok(entries) => {
                self.history = entries;
                self.machine.complete_fetch(token, Ok(()));
            }
            Err(e) => self.machine.complete_fetch(token, Err(e)),
        }
        Ok(())
    }

    // ── Export flow ─────────────────────────────────────────────────────

    /// Exports the current result set. With no questions on screen the
    /// fixed `NothingToExport` message shows inline and `None` comes
    /// back; export is not a producing request and never enters Loading.
    pub fn export(&mut self) -> Option<ExportDocument> {
        let results = match self.machine.phase() {
            Phase::Success(results) => results.clone(),
            _ => ResultSet {
                questions: Vec::new(),
                skills: Vec::new(),
            },
        };

        match export_document(&results) {
            Ok(doc) => Some(doc),
            Err(e) => {
                self.machine.fail_local(&e);
                None
            }
        }
    }
}
