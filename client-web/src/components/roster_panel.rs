//! Unseated roster: students waiting for a seat.
//!
//! Entries can be dragged onto the stage (an assign, not a move), clicked
//! to become the keyboard-assign target, or deleted outright.

use leptos::prelude::*;

use crate::state::chart::ChartState;
use crate::util::feedback;

/// Side-panel list of students without a seat.
#[component]
pub fn RosterPanel() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();

    view! {
        <div class="roster-panel">
            <div class="roster-panel__header">
                "Unseated"
                <span class="roster-panel__count">
                    {move || chart.get().unseated_count}
                </span>
            </div>
            <div class="roster-panel__list">
                {move || {
                    let state = chart.get();
                    if state.roster.is_empty() {
                        return view! {
                            <div class="roster-panel__empty">"Everyone is seated."</div>
                        }
                            .into_any();
                    }

                    let drag_enabled = state.core.drag_enabled();
                    state
                        .roster
                        .iter()
                        .map(|student| {
                            let id = student.id;
                            let name = student.name.clone();
                            let delete_prompt = format!("Remove {name} from the class?");
                            let score = student.score_display.clone();
                            let mut class = String::from("roster-panel__entry");
                            if state.selected_unseated == Some(id) {
                                class.push_str(" roster-panel__entry--selected");
                            }

                            let on_click = move |_| {
                                chart.update(|c| {
                                    c.selected_unseated =
                                        if c.selected_unseated == Some(id) { None } else { Some(id) };
                                });
                            };
                            let on_dragstart = move |ev: leptos::ev::DragEvent| {
                                let mut started = false;
                                chart.update(|c| started = c.core.begin_roster_drag(id));
                                if !started {
                                    ev.prevent_default();
                                    return;
                                }
                                #[cfg(feature = "hydrate")]
                                {
                                    if let Some(dt) = ev.data_transfer() {
                                        let _ = dt.set_data("text/plain", &id.to_string());
                                    }
                                }
                            };
                            let on_dragend = move |_| {
                                chart.update(|c| c.core.on_drag_end());
                            };
                            let on_delete = move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                if !feedback::confirm(&delete_prompt) {
                                    return;
                                }
                                #[cfg(feature = "hydrate")]
                                {
                                    crate::net::sync::submit_request(chart, move |classroom_id| async move {
                                        crate::net::api::delete_student(&classroom_id, id).await
                                    });
                                }
                            };

                            view! {
                                <div
                                    class=class
                                    draggable=drag_enabled.to_string()
                                    on:click=on_click
                                    on:dragstart=on_dragstart
                                    on:dragend=on_dragend
                                >
                                    <span class="roster-panel__name">{name}</span>
                                    {score.map(|score| view! {
                                        <span class="roster-panel__score">{score}</span>
                                    })}
                                    <button class="btn roster-panel__delete" on:click=on_delete>
                                        "\u{00d7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
