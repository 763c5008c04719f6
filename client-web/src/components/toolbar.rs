//! Top bar: undo/redo, group mode, and the group assignment controls.

use leptos::prelude::*;

use crate::state::chart::ChartState;
use crate::state::ui::UiState;

/// Toolbar for the classroom page.
///
/// Undo and redo are server-side operations; the buttons just post and
/// refresh. The group controls drive the engine's group mode, which
/// suspends dragging while it is on.
#[component]
pub fn Toolbar() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let group_mode = move || chart.get().core.selection.group_mode();
    let multi_count = move || chart.get().core.selection.multi().len();

    let on_undo = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::net::sync::submit_request(chart, |id| async move {
                crate::net::api::undo(&id).await
            });
        }
    };
    let on_redo = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::net::sync::submit_request(chart, |id| async move {
                crate::net::api::redo(&id).await
            });
        }
    };

    let on_toggle_group_mode = move |_| {
        let enabled = !chart.get().core.selection.group_mode();
        chart.update(|c| c.core.set_group_mode(enabled));
    };

    let on_clear_selection = move |_| {
        chart.update(|c| {
            c.core.selection.clear_multi();
            c.core.selection.set_selected(None);
        });
    };

    // Assign the entered group (empty input unassigns) to every seat in
    // the multi-selection, atomically.
    let on_apply_group = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let seats = chart.get().core.group_batch_keys();
            if seats.is_empty() {
                crate::util::feedback::alert("Select seats first.");
                return;
            }
            let group_id = ui.get().group_id();
            crate::net::sync::submit_request(chart, move |id| async move {
                crate::net::api::group_assign_batch(&id, group_id, &seats).await
            });
        }
    };

    view! {
        <div class="toolbar">
            <a href="/" class="toolbar__back" title="Back to classrooms">
                "\u{2190}"
            </a>
            <button class="btn toolbar__undo" on:click=on_undo>
                "Undo"
            </button>
            <button class="btn toolbar__redo" on:click=on_redo>
                "Redo"
            </button>
            <span class="toolbar__spacer"></span>
            <button
                class=move || {
                    if group_mode() {
                        "btn btn--active toolbar__group-toggle"
                    } else {
                        "btn toolbar__group-toggle"
                    }
                }
                on:click=on_toggle_group_mode
            >
                {move || if group_mode() { "Group mode: on" } else { "Group mode: off" }}
            </button>
            <input
                class="toolbar__group-input"
                type="text"
                placeholder="Group id"
                prop:value=move || ui.get().group_input
                on:input=move |ev| ui.update(|u| u.group_input = event_target_value(&ev))
            />
            <button class="btn btn--primary toolbar__group-apply" on:click=on_apply_group>
                {move || format!("Apply to {} seats", multi_count())}
            </button>
            <button class="btn toolbar__clear" on:click=on_clear_selection>
                "Clear selection"
            </button>
        </div>
    }
}
