//! Dismissable banner for the app-level notice.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <Show when=move || notice.with(|n| n.message.is_some())>
            <div class="notice" role="alert">
                <span>{move || notice.with(|n| n.message.clone().unwrap_or_default())}</span>
                <button class="notice__dismiss" on:click=move |_| notice.update(NoticeState::clear)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
