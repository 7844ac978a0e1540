use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which producer flow is armed. Mutated only by explicit user selection;
/// switching does not cancel an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    ResumeUpload,
    VoiceInput,
}

/// The skills + questions pair returned by one generation request.
///
/// Produced atomically from a single backend response and replaces any
/// prior set wholesale. Order is preserved exactly as received; the
/// backend does not guarantee dedup and neither do we.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub questions: Vec<String>,
    pub skills: Vec<String>,
}

/// One past generation, as returned by the history endpoint.
/// Read-only; not persisted locally beyond the current view session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Account shape returned by `/api/profile` and inside the login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
