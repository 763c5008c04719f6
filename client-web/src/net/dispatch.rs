//! Commit dispatch: turn an engine [`Action`] into a server request.
//!
//! `plan_for` is the pure half — it maps an action to the endpoint and
//! JSON body (or to a local alert / nothing at all) and is unit-tested.
//! `dispatch` posts the request and folds the envelope into a
//! [`DispatchResult`] the caller applies to the UI.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use chart::engine::Action;
use serde_json::json;

use super::api;

/// What a given action requires of the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchPlan {
    /// POST `body` to the classroom-scoped `endpoint`.
    Submit {
        endpoint: &'static str,
        body: serde_json::Value,
        /// Batch moves refresh even on a failure envelope, to reconcile
        /// whatever the server committed before failing.
        refresh_on_failure: bool,
    },
    /// Locally detected failure: show the message, send nothing.
    Alert(String),
    /// No-op.
    Nothing,
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// Whether the caller should re-fetch the classroom snapshot.
    pub refresh: bool,
    /// A message to surface to the user, if anything went wrong.
    pub error: Option<String>,
}

/// Map an engine action to its network plan. Pure.
#[must_use]
pub fn plan_for(action: &Action) -> DispatchPlan {
    match action {
        Action::None => DispatchPlan::Nothing,
        Action::Reject { message } => DispatchPlan::Alert(message.clone()),
        Action::Move { student, to } => DispatchPlan::Submit {
            endpoint: "move",
            body: json!({"student_id": student, "row": to.row, "col": to.col}),
            refresh_on_failure: false,
        },
        Action::Assign { student, to } => DispatchPlan::Submit {
            endpoint: "assign",
            body: json!({"student_id": student, "row": to.row, "col": to.col}),
            refresh_on_failure: false,
        },
        Action::ClearSeat { at } => DispatchPlan::Submit {
            endpoint: "clear",
            body: json!({"row": at.row, "col": at.col}),
            refresh_on_failure: false,
        },
        Action::MoveBatch { moves } => {
            let moves: Vec<serde_json::Value> = moves
                .iter()
                .map(|m| json!({"student_id": m.student, "row": m.to.row, "col": m.to.col}))
                .collect();
            DispatchPlan::Submit {
                endpoint: "move-batch",
                body: json!({"moves": moves}),
                refresh_on_failure: true,
            }
        }
    }
}

/// Execute an action against the server.
///
/// Transport failures report an error and no refresh (state is assumed
/// unchanged); failure envelopes report the server's message, refreshing
/// only for batch moves; successes always refresh.
pub async fn dispatch(classroom_id: &str, action: &Action) -> DispatchResult {
    match plan_for(action) {
        DispatchPlan::Nothing => DispatchResult::default(),
        DispatchPlan::Alert(message) => {
            DispatchResult { refresh: false, error: Some(message) }
        }
        DispatchPlan::Submit { endpoint, body, refresh_on_failure } => {
            match api::post_classroom(classroom_id, endpoint, &body).await {
                Ok(envelope) if envelope.is_success() => {
                    DispatchResult { refresh: true, error: None }
                }
                Ok(envelope) => DispatchResult {
                    refresh: refresh_on_failure,
                    error: Some(envelope.message_or_default()),
                },
                Err(message) => DispatchResult { refresh: false, error: Some(message) },
            }
        }
    }
}
