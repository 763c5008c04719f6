//! Classroom page — the seating chart workspace.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::roster_panel::RosterPanel;
use crate::components::seat_stage::SeatStage;
use crate::components::suggestion_toasts::SuggestionToasts;
use crate::components::toolbar::Toolbar;
use crate::net::sync;
use crate::state::chart::ChartState;
use crate::state::ui::{ActiveTab, UiState};
use crate::util::active_tab;

/// Whether a keyboard event targets a text-entry element and should be
/// left alone.
#[cfg(feature = "hydrate")]
fn is_editable_target(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() else {
        return false;
    };
    let tag = el.tag_name();
    tag == "INPUT" || tag == "TEXTAREA" || el.is_content_editable()
}

/// Classroom page — composes toolbar, stage, and side panel. Reads the
/// classroom ID from the route parameter and fetches the snapshot on
/// mount.
#[component]
pub fn ClassroomPage() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let classroom_id = move || params.read().get("id");

    // Reset and refetch when the route param changes.
    Effect::new(move || {
        let id = classroom_id();
        chart.update(|c| {
            *c = ChartState { classroom_id: id.clone(), ..ChartState::default() };
        });
        if id.is_some() {
            sync::refresh(chart);
        }
    });

    // Restore the persisted side-panel tab once on mount.
    Effect::new(move || {
        ui.update(|u| u.active_tab = active_tab::read_preference());
    });

    on_cleanup(move || {
        chart.update(|c| *c = ChartState::default());
    });

    // Keyboard shortcuts. Handled at window level with an editable-target
    // guard so typing in the group input stays unaffected.
    #[cfg(feature = "hydrate")]
    {
        use chart::engine::Action;

        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_editable_target(&ev) {
                return;
            }
            let ctrl = ev.ctrl_key() || ev.meta_key();
            match (ctrl, ev.key().as_str()) {
                (true, "z" | "Z") => {
                    ev.prevent_default();
                    sync::submit_request(chart, |id| async move {
                        crate::net::api::undo(&id).await
                    });
                }
                (true, "y" | "Y") => {
                    ev.prevent_default();
                    sync::submit_request(chart, |id| async move {
                        crate::net::api::redo(&id).await
                    });
                }
                (true, "c" | "C") => {
                    ev.prevent_default();
                    chart.update(|c| {
                        c.core.copy_seat();
                    });
                }
                (true, "x" | "X") => {
                    ev.prevent_default();
                    let mut action = Action::None;
                    chart.update(|c| action = c.core.cut_seat());
                    sync::submit(chart, action);
                }
                (true, "v" | "V") => {
                    ev.prevent_default();
                    let action = chart.get_untracked().core.paste_seat();
                    sync::submit(chart, action);
                }
                (true, "d" | "D") | (false, "Delete" | "Backspace") => {
                    ev.prevent_default();
                    let action = chart.get_untracked().core.clear_seat_action();
                    sync::submit(chart, action);
                }
                (true, "u" | "U") => {
                    ev.prevent_default();
                    let state = chart.get_untracked();
                    if let Some(student) = state.selected_unseated {
                        sync::submit(chart, state.core.assign_unseated(student));
                    }
                }
                _ => {}
            }
        });
        on_cleanup(move || key_handle.remove());
    }

    let set_tab = move |tab: ActiveTab| {
        ui.update(|u| u.active_tab = tab);
        active_tab::store_preference(tab);
    };
    let tab_class = move |tab: ActiveTab| {
        if ui.get().active_tab == tab {
            "btn btn--active classroom-page__tab"
        } else {
            "btn classroom-page__tab"
        }
    };

    view! {
        <div class="classroom-page">
            <div class="classroom-page__toolbar">
                <Toolbar/>
            </div>
            <div class="classroom-page__stage">
                <SeatStage/>
            </div>
            <div class="classroom-page__side-panel">
                <div class="classroom-page__tabs">
                    <button
                        class=move || tab_class(ActiveTab::Roster)
                        on:click=move |_| set_tab(ActiveTab::Roster)
                    >
                        "Roster"
                    </button>
                    <button
                        class=move || tab_class(ActiveTab::Suggestions)
                        on:click=move |_| set_tab(ActiveTab::Suggestions)
                    >
                        "Suggestions"
                    </button>
                </div>
                {move || match ui.get().active_tab {
                    ActiveTab::Roster => view! { <RosterPanel/> }.into_any(),
                    ActiveTab::Suggestions => view! { <SuggestionToasts/> }.into_any(),
                }}
            </div>
        </div>
    }
}
