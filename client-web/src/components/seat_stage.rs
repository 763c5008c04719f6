//! The seat grid: rendering, click selection, drag-and-drop, and the
//! marquee gesture.
//!
//! The stage renders whatever `ChartState` holds and forwards raw events
//! to the engine; every visual (selection rings, drag decorations, the
//! drop hint) is recomputed from engine output, never accumulated in the
//! DOM. Drops produce an [`Action`] that goes straight to the dispatcher.

use chart::engine::Action;
use chart::grid::{CellType, SeatKey, StudentId};
use chart::preview::{Decoration, HintTone, Preview};
use chart::selection::Modifiers;
#[cfg(feature = "hydrate")]
use chart::selection::{ScreenPoint, ScreenRect};
use leptos::prelude::*;

use crate::net::sync;
use crate::state::chart::ChartState;
use crate::state::ui::UiState;

fn modifiers_from_mouse(ev: &leptos::ev::MouseEvent) -> Modifiers {
    Modifiers {
        shift: ev.shift_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
    }
}

/// Current screen bounding boxes for every rendered cell, for marquee hit
/// testing on release.
#[cfg(feature = "hydrate")]
fn collect_seat_bounds() -> Vec<(SeatKey, ScreenRect)> {
    use wasm_bindgen::JsCast;

    let mut bounds = Vec::new();
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return bounds;
    };
    let Ok(nodes) = doc.query_selector_all("[data-seat-key]") else {
        return bounds;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Some(el) = node.dyn_ref::<web_sys::Element>() else { continue };
        let Some(raw) = el.get_attribute("data-seat-key") else { continue };
        let Some(key) = SeatKey::parse(&raw) else { continue };
        let rect = el.get_bounding_client_rect();
        bounds.push((
            key,
            ScreenRect {
                left: rect.left(),
                top: rect.top(),
                right: rect.right(),
                bottom: rect.bottom(),
            },
        ));
    }
    bounds
}

/// Seat grid stage with drag-and-drop and marquee selection.
#[component]
pub fn SeatStage() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Drag feedback for the current hover; replaced wholesale on every
    // drag-over and cleared on drop or drag end.
    let preview = RwSignal::new(Preview::empty());

    // The marquee tracks the pointer at window level, since the gesture
    // can leave the stage mid-drag.
    #[cfg(feature = "hydrate")]
    {
        let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let at = ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let mut rect = None;
            chart.update(|c| rect = c.core.on_stage_move(at));
            if let Some(rect) = rect {
                ui.update(|u| u.marquee = Some(rect));
            }
        });
        let up_handle = window_event_listener(leptos::ev::mouseup, move |ev| {
            if !chart.get_untracked().core.marquee_active() {
                return;
            }
            let at = ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let bounds = collect_seat_bounds();
            chart.update(|c| c.core.on_stage_release(at, &bounds));
            ui.update(|u| u.marquee = None);
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
        });
    }

    // Marquee begins only on the stage background, never on a cell.
    let on_stage_mousedown = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let on_background = match (ev.target(), ev.current_target()) {
                (Some(target), Some(current)) => target == current,
                _ => false,
            };
            if !on_background {
                return;
            }
            let at = ScreenPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let modifiers = modifiers_from_mouse(&ev);
            let mut started = false;
            chart.update(|c| started = c.core.on_stage_press(at, ev.button(), modifiers));
            if started {
                ev.prevent_default();
                ui.update(|u| u.marquee = Some(ScreenRect::from_corners(at, at)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="seat-stage" on:mousedown=on_stage_mousedown>
            {move || {
                let state = chart.get();
                let pv = preview.get();
                let cells = state.core.grid.sorted_cells();
                if cells.is_empty() {
                    return view! {
                        <div class="seat-stage__empty">"No seating layout yet."</div>
                    }
                        .into_any();
                }

                let columns = cells.iter().map(|c| c.key.col).max().unwrap_or(0) + 1;
                let grid_style = format!("grid-template-columns: repeat({columns}, minmax(72px, 1fr));");
                let drag_enabled = state.core.drag_enabled();

                let cell_views = cells
                    .into_iter()
                    .map(|cell| {
                        let key = cell.key;
                        let mut class = String::from("seat-stage__cell");
                        match cell.cell_type {
                            CellType::Seat => class.push_str(" seat-stage__cell--seat"),
                            CellType::Aisle => class.push_str(" seat-stage__cell--aisle"),
                            CellType::Podium => class.push_str(" seat-stage__cell--podium"),
                            CellType::Empty => class.push_str(" seat-stage__cell--empty"),
                        }
                        if cell.student.is_some() {
                            class.push_str(" seat-stage__cell--occupied");
                        }
                        if cell.group.is_some() {
                            class.push_str(" seat-stage__cell--grouped");
                        }
                        if state.core.selection.selected() == Some(key) {
                            class.push_str(" seat-stage__cell--selected");
                        }
                        if state.core.selection.contains(key) {
                            class.push_str(" seat-stage__cell--multi");
                        }
                        for (marked, decoration) in &pv.marks {
                            if *marked != key {
                                continue;
                            }
                            class.push_str(match decoration {
                                Decoration::Origin => " seat-stage__cell--drag-origin",
                                Decoration::ValidTarget => " seat-stage__cell--drop-valid",
                                Decoration::InvalidTarget => " seat-stage__cell--drop-invalid",
                            });
                        }

                        let draggable = drag_enabled && cell.is_seat() && cell.student.is_some();
                        let student_name = cell.student.as_ref().map(|s| s.name.clone());
                        let score = cell.student.as_ref().and_then(|s| s.score_display.clone());
                        let group_name = cell.group.as_ref().map(|g| g.name.clone());
                        let furniture_label = if cell.is_seat() {
                            None
                        } else {
                            Some(cell.cell_type_display.clone())
                        };
                        let hint = pv
                            .hint
                            .as_ref()
                            .filter(|(hinted, _)| *hinted == key)
                            .map(|(_, h)| {
                                let tone = match h.tone {
                                    HintTone::Valid => "seat-stage__hint--valid",
                                    HintTone::Invalid => "seat-stage__hint--invalid",
                                    HintTone::Neutral => "seat-stage__hint--neutral",
                                };
                                (format!("seat-stage__hint {tone}"), h.label.clone())
                            });

                        let on_click = move |ev: leptos::ev::MouseEvent| {
                            chart.update(|c| c.core.on_seat_click(key, modifiers_from_mouse(&ev)));
                        };
                        // Hover only feeds the keyboard fallback, so skip the re-render.
                        let on_mouseenter = move |_| {
                            chart.update_untracked(|c| c.core.on_seat_hover(key));
                        };
                        let on_dragstart = move |ev: leptos::ev::DragEvent| {
                            let mut started = false;
                            chart.update(|c| started = c.core.begin_seat_drag(key));
                            if !started {
                                ev.prevent_default();
                                return;
                            }
                            #[cfg(feature = "hydrate")]
                            {
                                let payload = chart.get_untracked().core.grid.occupant(key);
                                if let (Some(dt), Some(student)) = (ev.data_transfer(), payload) {
                                    let _ = dt.set_data("text/plain", &student.to_string());
                                }
                            }
                        };
                        let on_dragover = move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            preview.set(chart.get_untracked().core.on_drag_over(key));
                        };
                        let on_drop = move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            #[allow(unused_mut)]
                            let mut payload: Option<StudentId> = None;
                            #[cfg(feature = "hydrate")]
                            {
                                payload = ev
                                    .data_transfer()
                                    .and_then(|dt| dt.get_data("text/plain").ok())
                                    .and_then(|raw| raw.parse().ok());
                            }
                            let mut action = Action::None;
                            chart.update(|c| action = c.core.on_drop(key, payload));
                            preview.set(Preview::empty());
                            sync::submit(chart, action);
                        };
                        let on_dragend = move |_| {
                            chart.update(|c| c.core.on_drag_end());
                            preview.set(Preview::empty());
                        };

                        view! {
                            <div
                                class=class
                                data-seat-key=key.to_string()
                                draggable=draggable.to_string()
                                on:click=on_click
                                on:mouseenter=on_mouseenter
                                on:dragstart=on_dragstart
                                on:dragover=on_dragover
                                on:drop=on_drop
                                on:dragend=on_dragend
                            >
                                {student_name.map(|name| view! {
                                    <span class="seat-stage__student">{name}</span>
                                })}
                                {score.map(|score| view! {
                                    <span class="seat-stage__score">{score}</span>
                                })}
                                {group_name.map(|name| view! {
                                    <span class="seat-stage__group">{name}</span>
                                })}
                                {furniture_label.map(|label| view! {
                                    <span class="seat-stage__furniture">{label}</span>
                                })}
                                {hint.map(|(class, label)| view! {
                                    <span class=class>{label}</span>
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <div class="seat-stage__grid" style=grid_style>
                        {cell_views}
                    </div>
                }
                    .into_any()
            }}
            {move || {
                ui.get().marquee.map(|rect| {
                    let style = format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                        rect.left,
                        rect.top,
                        rect.width(),
                        rect.height(),
                    );
                    view! { <div class="seat-stage__marquee" style=style></div> }
                })
            }}
        </div>
    }
}
