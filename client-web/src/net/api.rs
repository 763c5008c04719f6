//! REST helpers for the seating server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics: a transport
//! failure or a non-success envelope surfaces as a user-visible message
//! and leaves the rendered state untouched until the next refresh.

#![allow(clippy::unused_async)]

use chart::grid::{SeatKey, StudentId};
use serde_json::json;

use super::types::{StateSnapshot, StatusEnvelope};

/// Build the API path for a classroom-scoped endpoint.
#[must_use]
pub fn classroom_path(classroom_id: &str, endpoint: &str) -> String {
    format!("/api/classrooms/{classroom_id}/{endpoint}")
}

/// POST a JSON body to an absolute API path and decode the status envelope.
///
/// # Errors
///
/// Returns the transport error message, or a status-code note when the
/// response body is not a valid envelope.
pub async fn post_json(url: &str, body: &serde_json::Value) -> Result<StatusEnvelope, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        // Failure envelopes ride on 4xx responses; decode before checking.
        match resp.json::<StatusEnvelope>().await {
            Ok(envelope) => Ok(envelope),
            Err(_) => Err(format!("request failed: {}", resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err("not available on the server".to_owned())
    }
}

/// POST to a classroom-scoped endpoint.
///
/// # Errors
///
/// See [`post_json`].
pub async fn post_classroom(
    classroom_id: &str,
    endpoint: &str,
    body: &serde_json::Value,
) -> Result<StatusEnvelope, String> {
    post_json(&classroom_path(classroom_id, endpoint), body).await
}

/// Fetch the full classroom snapshot, cache-busted the way the JS client
/// did with `Date.now()`.
///
/// # Errors
///
/// Returns the transport or decode error message.
pub async fn fetch_state(classroom_id: &str) -> Result<StateSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}?t={}", classroom_path(classroom_id, "state"), js_sys::Date::now());
        let resp = gloo_net::http::Request::get(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("refresh failed: {}", resp.status()));
        }
        resp.json::<StateSnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = classroom_id;
        Err("not available on the server".to_owned())
    }
}

/// Assign a group (or `None` to unassign) to every listed seat atomically.
///
/// # Errors
///
/// See [`post_json`].
pub async fn group_assign_batch(
    classroom_id: &str,
    group_id: Option<i64>,
    seats: &[SeatKey],
) -> Result<StatusEnvelope, String> {
    let seats: Vec<serde_json::Value> =
        seats.iter().map(|k| json!({"row": k.row, "col": k.col})).collect();
    let body = json!({"group_id": group_id, "seats": seats});
    post_classroom(classroom_id, "group-assign-batch", &body).await
}

/// Undo the last seating mutation.
///
/// # Errors
///
/// See [`post_json`].
pub async fn undo(classroom_id: &str) -> Result<StatusEnvelope, String> {
    post_classroom(classroom_id, "undo", &json!({})).await
}

/// Redo the last undone mutation.
///
/// # Errors
///
/// See [`post_json`].
pub async fn redo(classroom_id: &str) -> Result<StatusEnvelope, String> {
    post_classroom(classroom_id, "redo", &json!({})).await
}

/// Delete a student from the classroom entirely.
///
/// # Errors
///
/// See [`post_json`].
pub async fn delete_student(
    classroom_id: &str,
    student: StudentId,
) -> Result<StatusEnvelope, String> {
    let url = format!("/api/classrooms/{classroom_id}/students/{student}/delete");
    post_json(&url, &json!({})).await
}
