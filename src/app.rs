//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::config::ApiConfig;
use crate::net::dispatch::Dispatcher;
use crate::net::transport::default_transport;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::routes::RouteName;
use crate::state::notice::NoticeState;
use crate::state::session::{Session, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the dispatcher and session store, provides them as context, and
/// kicks off the mount-time session check in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    let dispatcher = Dispatcher::new(&config, default_transport());
    let store = SessionStore::new(dispatcher.clone());

    // Mirror the store into a signal so guards re-render on every change.
    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |s: &Session| session.set(s.clone()));

    provide_context(session);
    provide_context(RwSignal::new(NoticeState::default()));
    provide_context(StoredValue::new_local(dispatcher));
    provide_context(StoredValue::new_local(store.clone()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        store.initialize().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rustle.css"/>
        <Title text="Rustle"/>

        <NoticeBanner/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(RouteName::Home.segment()) view=HomeRoute/>
                <Route path=StaticSegment(RouteName::Login.segment()) view=LoginRoute/>
                <Route path=StaticSegment(RouteName::Dashboard.segment()) view=DashboardRoute/>
            </Routes>
        </Router>
    }
}

/// `/`: the dashboard for a signed-in user, the public landing otherwise.
#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <ProtectedRoute fallback=|| view! { <HomePage/> }>
            <DashboardPage/>
        </ProtectedRoute>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    view! {
        <PublicRoute>
            <LoginPage/>
        </PublicRoute>
    }
}

#[component]
fn DashboardRoute() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardPage/>
        </ProtectedRoute>
    }
}
