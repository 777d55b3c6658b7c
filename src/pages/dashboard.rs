//! Dashboard page: the authenticated landing view with logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logout is fail-open: the store clears the local session whatever the
//! backend answers. A failed backend call is still reported, through the
//! app-level notice, because this page unmounts as soon as the session
//! clears.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::dispatch::DispatchError;
use crate::routes::RouteName;
use crate::state::notice::NoticeState;
use crate::state::session::{Session, SessionHandle};

fn logout_notice(outcome: &Result<(), DispatchError>) -> Option<String> {
    outcome
        .as_ref()
        .err()
        .map(|e| format!("Signed out locally, but the server did not confirm the logout ({e})."))
}

fn greeting(session: &Session) -> String {
    session
        .user()
        .map_or_else(|| "Protected Area".to_owned(), |user| format!("Signed in as {}", user.display_name()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        notice.update(NoticeState::clear);

        let store = store.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = store.logout().await;
            if let Some(message) = logout_notice(&outcome) {
                notice.update(|n| n.show(message));
            }
            navigate(RouteName::Login.path(), NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span>{move || session.with(greeting)}</span>
            </header>
            <button class="dashboard-page__logout" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </div>
    }
}
