//! Placeholder shown while the session is still resolving.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-label="Loading">
            <p>"Loading..."</p>
        </div>
    }
}
