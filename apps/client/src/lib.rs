//! Headless interaction core of the AI interview-question client.
//!
//! Users upload a résumé or dictate spoken experience; the core forwards
//! the payload to the question-generation backend and exposes the
//! returned skills and questions as a single shared result view, with
//! export to a document file. The intelligence (résumé parsing, skill
//! extraction, question generation) lives entirely in the backend; this
//! crate owns the client-side session model — which input mode is armed,
//! whether a request is in flight, the last error, the current results —
//! and the speech-capture lifecycle around it.
//!
//! Embedding shells construct an [`InteractionSession`] over a
//! [`RemoteClient`] (or any [`QuestionBackend`]) and a platform
//! [`SpeechCaptureProvider`], then drive it from UI events.

pub mod config;
pub mod errors;
pub mod export;
pub mod flows;
pub mod models;
pub mod remote;
pub mod render;
pub mod session;
pub mod speech;

pub use config::Config;
pub use errors::{ClientError, RequestKind};
pub use export::{export_document, ExportDocument};
pub use flows::InteractionSession;
pub use models::{HistoryEntry, InteractionMode, ResultSet, User};
pub use remote::auth::AuthClient;
pub use remote::{QuestionBackend, RemoteClient};
pub use render::{view_model, ViewModel};
pub use session::{Phase, SessionMachine};
pub use speech::{
    CaptureController, CaptureState, RecognitionEvent, SpeechCaptureProvider, SpeechRecognizer,
};
