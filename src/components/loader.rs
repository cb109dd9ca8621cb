//! Loader Component

use leptos::prelude::*;

/// Spinner shown while a request is in flight
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="Loading">
            <span class="loader-spinner"></span>
        </div>
    }
}
