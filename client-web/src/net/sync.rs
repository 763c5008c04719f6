//! Bridge between engine actions and the Leptos state signals.
//!
//! Components produce [`Action`] values from pointer and keyboard events;
//! this module submits them to the server and folds the outcome back into
//! `ChartState`. The server stays the single source of truth, so every
//! successful commit ends with a snapshot refresh rather than a local
//! mutation.
//!
//! All network work is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

use chart::engine::Action;
use leptos::prelude::RwSignal;

use crate::state::chart::ChartState;

/// Re-fetch the classroom snapshot and apply it.
pub fn refresh(chart: RwSignal<ChartState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(refresh_now(chart));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chart;
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_now(chart: RwSignal<ChartState>) {
    use leptos::prelude::{GetUntracked, Update};

    let Some(id) = chart.get_untracked().classroom_id else {
        return;
    };
    match crate::net::api::fetch_state(&id).await {
        Ok(snapshot) => chart.update(|c| c.apply_snapshot(snapshot)),
        Err(e) => leptos::logging::warn!("state refresh failed: {e}"),
    }
}

/// Submit one engine action, surface any failure, and on success
/// acknowledge the commit to the engine before refreshing.
pub fn submit(chart: RwSignal<ChartState>, action: Action) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{GetUntracked, Update};

        if matches!(action, Action::None) {
            return;
        }
        let Some(id) = chart.get_untracked().classroom_id else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::dispatch::dispatch(&id, &action).await;
            match result.error {
                Some(message) => crate::util::feedback::alert(&message),
                None => chart.update(|c| c.core.on_commit_success(&action)),
            }
            if result.refresh {
                refresh_now(chart).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chart, action);
    }
}

/// POST to a classroom endpoint that takes no engine action (undo, redo,
/// group assignment), then refresh.
#[cfg(feature = "hydrate")]
pub fn submit_request<F, Fut>(chart: RwSignal<ChartState>, request: F)
where
    F: FnOnce(String) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<crate::net::types::StatusEnvelope, String>> + 'static,
{
    use leptos::prelude::GetUntracked;

    let Some(id) = chart.get_untracked().classroom_id else {
        return;
    };
    leptos::task::spawn_local(async move {
        match request(id).await {
            Ok(envelope) if envelope.is_success() => refresh_now(chart).await,
            Ok(envelope) => crate::util::feedback::alert(&envelope.message_or_default()),
            Err(e) => crate::util::feedback::alert(&e),
        }
    });
}
