//! Speech capture — capability seam over the platform's continuous
//! speech-to-text engine, plus the controller that owns one capture
//! session at a time.

pub mod controller;

pub use controller::{CaptureController, CaptureState};

/// One recognition event pushed by the platform engine. Final events
/// carry text that is retained for the rest of the session; interim
/// events carry display-only text that the next event replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionEvent {
    pub text: String,
    pub is_final: bool,
}

impl RecognitionEvent {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Handle to a running platform recognition engine. The engine delivers
/// `RecognitionEvent`s and error codes to the controller through the
/// embedding shell; this trait only covers the lifecycle the controller
/// drives itself.
pub trait SpeechRecognizer: Send {
    fn display_name(&self) -> &'static str;
    fn start(&mut self);
    fn stop(&mut self);
}

/// Capability interface for speech recognition. `None` models a platform
/// with no speech engine at all, which the controller surfaces as
/// `UnsupportedPlatform` without ever constructing a recognizer.
pub trait SpeechCaptureProvider: Send {
    fn recognizer(&self) -> Option<Box<dyn SpeechRecognizer>>;
}

/// Provider for platforms without a speech engine.
pub struct UnavailableProvider;

impl SpeechCaptureProvider for UnavailableProvider {
    fn recognizer(&self) -> Option<Box<dyn SpeechRecognizer>> {
        None
    }
}

/// Simulated engine for shells and tests that have no platform engine to
/// bind. It never emits events on its own; drive the controller with
/// `RecognitionEvent`s directly.
#[derive(Default)]
pub struct SimulatedRecognizer {
    started: bool,
}

impl SpeechRecognizer for SimulatedRecognizer {
    fn display_name(&self) -> &'static str {
        "Simulated recognizer"
    }

    fn start(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.started = false;
    }
}

/// Provider handing out `SimulatedRecognizer`s.
pub struct SimulatedProvider;

impl SpeechCaptureProvider for SimulatedProvider {
    fn recognizer(&self) -> Option<Box<dyn SpeechRecognizer>> {
        Some(Box::<SimulatedRecognizer>::default())
    }
}
