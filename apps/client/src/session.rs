//! Interaction state machine — the central coordinator for the shared
//! result view.
//!
//! The display state is a tagged union: loading, error, and results are
//! mutually exclusive by construction, never a combination of boolean
//! flags. All mutation goes through the transition methods below.
//!
//! Two rules the UI used to enforce only by disabling controls are
//! explicit here: a producing action while one is in flight is rejected
//! with `Busy`, and a completion carrying a stale request token is
//! discarded instead of clobbering a newer request's outcome.

use tracing::{debug, warn};

use crate::errors::{ClientError, RequestKind};
use crate::models::{InteractionMode, ResultSet};

/// Display state of the shared result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success(ResultSet),
    Error(String),
}

/// Proof that a producing request was dispatched. The sequence number is
/// monotonic per machine; completions must present their token so stale
/// ones can be told apart from the latest dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    seq: u64,
    kind: RequestKind,
}

impl RequestToken {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

pub struct SessionMachine {
    phase: Phase,
    mode: InteractionMode,
    /// Sequence number of the most recently dispatched request.
    latest_seq: u64,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            mode: InteractionMode::ResumeUpload,
            latest_seq: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Mode switching is permitted in any phase and does not cancel an
    /// in-flight request; that request's completion still applies.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }

    /// Dispatches a producing request: clears any prior error and prior
    /// results, enters Loading, and hands back the token the completion
    /// must present. Rejected with `Busy` while a request is in flight.
    pub fn begin(&mut self, kind: RequestKind) -> Result<RequestToken, ClientError> {
        if self.phase == Phase::Loading {
            return Err(ClientError::Busy);
        }

        self.latest_seq += 1;
        self.phase = Phase::Loading;
        debug!("Request {} ({kind:?}) dispatched", self.latest_seq);

        Ok(RequestToken {
            seq: self.latest_seq,
            kind,
        })
    }

    /// Applies a producer completion: Success with the new result set, or
    /// Error with the fixed message for the failing flow.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<ResultSet, ClientError>) {
        if !self.accept(token) {
            return;
        }

        self.phase = match outcome {
            Ok(results) => Phase::Success(results),
            Err(e) => Phase::Error(e.user_message(token.kind)),
        };
    }

    /// Applies a completion for a request that yields no result set (the
    /// history fetch): back to Idle on success, Error on failure.
    pub fn complete_fetch(&mut self, token: RequestToken, outcome: Result<(), ClientError>) {
        if !self.accept(token) {
            return;
        }

        self.phase = match outcome {
            Ok(()) => Phase::Idle,
            Err(e) => Phase::Error(e.user_message(token.kind)),
        };
    }

    /// Surfaces an error that never went through Loading (empty capture,
    /// unsupported platform, nothing to export). `RequestKind` only
    /// shapes `RequestFailed` wording, so `Voice` is a fine default for
    /// these local failures.
    pub fn fail_local(&mut self, err: &ClientError) {
        self.phase = Phase::Error(err.user_message(RequestKind::Voice));
    }

    /// Explicit dismiss action on the inline error banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::Error(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// A completion is accepted only for the latest dispatched request.
    /// Out-of-order completions from an older request are logged and
    /// dropped, leaving the phase untouched.
    fn accept(&mut self, token: RequestToken) -> bool {
        if token.seq != self.latest_seq {
            warn!(
                "Discarding stale completion (request {} superseded by {})",
                token.seq, self.latest_seq
            );
            return false;
        }
        true
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}
