//! Wire types for the seating server's JSON API.
//!
//! Mutation endpoints answer with a [`StatusEnvelope`]; the state endpoint
//! answers with a [`StateSnapshot`] that is re-rendered wholesale after
//! every mutation (the server is the sole source of truth).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chart::grid::{SeatSnapshot, StudentInfo};
use serde::Deserialize;

/// The `{status, message?}` envelope every mutation endpoint returns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusEnvelope {
    /// An absent status counts as success; only an explicit non-`success`
    /// status is a server-reported failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_empty() || self.status == "success"
    }

    /// The server's failure message, or a generic fallback.
    #[must_use]
    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_else(|| "operation failed".to_owned())
    }
}

/// Full classroom snapshot from the state endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateSnapshot {
    pub seats: Vec<SeatSnapshot>,
    #[serde(default)]
    pub unseated: Vec<StudentInfo>,
    #[serde(default)]
    pub unseated_count: u32,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// A layout suggestion: either plain advice text for the suggestion list,
/// or an actionable card rendered as a toast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    Card(SuggestionCard),
    Text(String),
}

/// An actionable suggestion with an apply button and an optional ignore
/// button. `kind` steers client-side handling: `export_suggestion`
/// navigates, `auto_fixed` just dismisses, anything else posts to
/// `action_url`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestionCard {
    pub message: String,
    pub action_label: String,
    pub action_url: String,
    #[serde(default)]
    pub ignore_label: Option<String>,
    #[serde(default)]
    pub ignore_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
