//! Result rendering — turns the current phase into a view model the
//! embedding shell can paint directly. Order is preserved exactly as
//! received from the backend; no sorting or dedup happens client-side.

use serde::{Deserialize, Serialize};

use crate::models::{HistoryEntry, ResultSet};
use crate::session::Phase;

pub const LOADING_MESSAGE: &str = "Analyzing your profile...";

/// One numbered question card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCard {
    /// 1-based display number.
    pub number: usize,
    pub text: String,
}

/// What the result area should show right now. Exactly one variant holds
/// at a time, mirroring the phase machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewModel {
    Idle,
    Loading {
        message: String,
    },
    /// Inline banner with an explicit dismiss control.
    Error {
        message: String,
    },
    Results {
        /// Unordered tag list.
        skills: Vec<String>,
        /// Numbered, in response order.
        cards: Vec<QuestionCard>,
    },
}

pub fn view_model(phase: &Phase) -> ViewModel {
    match phase {
        Phase::Idle => ViewModel::Idle,
        Phase::Loading => ViewModel::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        Phase::Error(message) => ViewModel::Error {
            message: message.clone(),
        },
        Phase::Success(results) => ViewModel::Results {
            skills: results.skills.clone(),
            cards: question_cards(results),
        },
    }
}

pub fn question_cards(results: &ResultSet) -> Vec<QuestionCard> {
    results
        .questions
        .iter()
        .enumerate()
        .map(|(index, text)| QuestionCard {
            number: index + 1,
            text: text.clone(),
        })
        .collect()
}

/// Display row for one history entry: timestamp (when present) plus the
/// entry's questions, in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub timestamp: Option<String>,
    pub questions: Vec<String>,
    pub skills: Vec<String>,
}

pub fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|entry| HistoryRow {
            timestamp: entry.timestamp.map(|t| t.to_rfc3339()),
            questions: entry.questions.clone(),
            skills: entry.skills.clone(),
        })
        .collect()
}
