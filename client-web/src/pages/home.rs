//! Landing page.

use leptos::prelude::*;

/// Minimal landing page; classrooms are reached by direct link from the
/// course site.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Seating Charts"</h1>
            <p>"Open a classroom from your course page to edit its seating chart."</p>
        </div>
    }
}
