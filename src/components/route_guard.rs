//! Route guards gating views on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies one of two policies: protected routes need a
//! session, public routes (login) make no sense with one. The decision is a
//! pure function of the current [`Session`]; the components just render it
//! and re-run whenever the session signal changes.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingIndicator;
use crate::routes::RouteName;
use crate::state::session::{Session, SessionStatus};

/// What [`ProtectedRoute`] shows for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectedOutcome {
    Loading,
    Render,
    Fallback,
    Redirect(&'static str),
}

/// What [`PublicRoute`] shows for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

pub fn protected_outcome(session: &Session, has_fallback: bool) -> ProtectedOutcome {
    match session.status() {
        SessionStatus::Resolving => ProtectedOutcome::Loading,
        SessionStatus::Authenticated => ProtectedOutcome::Render,
        SessionStatus::Unauthenticated if has_fallback => ProtectedOutcome::Fallback,
        SessionStatus::Unauthenticated => ProtectedOutcome::Redirect(RouteName::Login.path()),
    }
}

pub fn public_outcome(session: &Session) -> PublicOutcome {
    match session.status() {
        SessionStatus::Resolving => PublicOutcome::Loading,
        SessionStatus::Authenticated => PublicOutcome::Redirect(RouteName::Home.path()),
        SessionStatus::Unauthenticated => PublicOutcome::Render,
    }
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Renders `children` only for an authenticated session. Otherwise shows
/// `fallback`, or redirects to the login route when there is none.
#[component]
pub fn ProtectedRoute(children: ChildrenFn, #[prop(optional, into)] fallback: Option<ViewFn>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let has_fallback = fallback.is_some();

    move || match session.with(|s| protected_outcome(s, has_fallback)) {
        ProtectedOutcome::Loading => view! { <LoadingIndicator/> }.into_any(),
        ProtectedOutcome::Render => children().into_any(),
        ProtectedOutcome::Fallback => fallback.as_ref().map(ViewFn::run).into_any(),
        ProtectedOutcome::Redirect(path) => view! { <Redirect path=path options=replace_history()/> }.into_any(),
    }
}

/// Renders `children` only when nobody is signed in; an authenticated
/// visitor is sent to the home route.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || match session.with(public_outcome) {
        PublicOutcome::Loading => view! { <LoadingIndicator/> }.into_any(),
        PublicOutcome::Render => children().into_any(),
        PublicOutcome::Redirect(path) => view! { <Redirect path=path options=replace_history()/> }.into_any(),
    }
}
