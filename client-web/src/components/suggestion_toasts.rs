//! Layout suggestions: plain advice lines and actionable toast cards.

use leptos::prelude::*;

use crate::net::types::Suggestion;
use crate::state::chart::ChartState;
use crate::util::feedback;

/// POST a suggestion URL and refresh the snapshot on success.
#[cfg(feature = "hydrate")]
fn post_suggestion(chart: RwSignal<ChartState>, url: String) {
    leptos::task::spawn_local(async move {
        match crate::net::api::post_json(&url, &serde_json::json!({})).await {
            Ok(envelope) if envelope.is_success() => crate::net::sync::refresh(chart),
            Ok(envelope) => feedback::alert(&envelope.message_or_default()),
            Err(e) => feedback::alert(&e),
        }
    });
}

/// Suggestion list for the side panel.
///
/// Cards dismissed in this session stay hidden until the next snapshot
/// replaces the list; the server owns which suggestions still apply.
#[component]
pub fn SuggestionToasts() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();

    let dismissed = RwSignal::new(Vec::<usize>::new());
    let last_seen = RwSignal::new(Vec::<Suggestion>::new());

    // A fresh suggestion list invalidates session-local dismissals.
    Effect::new(move || {
        let current = chart.get().suggestions;
        if last_seen.get_untracked() != current {
            last_seen.set(current);
            dismissed.set(Vec::new());
        }
    });

    view! {
        <div class="suggestion-toasts">
            {move || {
                let suggestions = chart.get().suggestions;
                let hidden = dismissed.get();
                if suggestions.is_empty() {
                    return view! {
                        <div class="suggestion-toasts__empty">"No suggestions right now."</div>
                    }
                        .into_any();
                }

                suggestions
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !hidden.contains(index))
                    .map(|(index, suggestion)| match suggestion {
                        Suggestion::Text(text) => {
                            let text = text.clone();
                            view! {
                                <div class="suggestion-toasts__line">{text}</div>
                            }
                                .into_any()
                        }
                        Suggestion::Card(card) => {
                            let message = card.message.clone();
                            let action_label = card.action_label.clone();
                            let action_url = card.action_url.clone();
                            let kind = card.kind.clone();
                            let ignore = card
                                .ignore_url
                                .clone()
                                .map(|url| (url, card.ignore_label.clone().unwrap_or_else(|| "Ignore".to_owned())));

                            let on_action = move |_| {
                                match kind.as_deref() {
                                    // Export links leave the page instead of posting.
                                    Some("export_suggestion") => feedback::navigate_to(&action_url),
                                    // Already applied server-side; just dismiss.
                                    Some("auto_fixed") => dismissed.update(|d| d.push(index)),
                                    _ => {
                                        #[cfg(feature = "hydrate")]
                                        {
                                            post_suggestion(chart, action_url.clone());
                                        }
                                        dismissed.update(|d| d.push(index));
                                    }
                                }
                            };
                            let on_ignore_url = ignore.as_ref().map(|(url, _)| url.clone());
                            let on_ignore = move |_| {
                                if let Some(url) = &on_ignore_url {
                                    #[cfg(feature = "hydrate")]
                                    {
                                        post_suggestion(chart, url.clone());
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    {
                                        let _ = url;
                                    }
                                }
                                dismissed.update(|d| d.push(index));
                            };

                            view! {
                                <div class="suggestion-toasts__card">
                                    <span class="suggestion-toasts__message">{message}</span>
                                    <button class="btn btn--primary" on:click=on_action>
                                        {action_label}
                                    </button>
                                    {ignore.map(|(_, label)| view! {
                                        <button class="btn" on:click=on_ignore>
                                            {label}
                                        </button>
                                    })}
                                </div>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
