//! Login page: username + password form against `POST /user/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only performs the login call and then asks the session store to
//! confirm. It never redirects itself: once the session resolves as
//! authenticated, the wrapping `PublicRoute` sends the user home. The
//! re-check also remounts this page, so a login that the backend accepted
//! but that left no session is reported through the app-level notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::dispatch::{DispatchError, Dispatcher, DispatcherHandle};
use crate::net::types::LoginCredentials;
use crate::state::notice::NoticeState;
use crate::state::session::{SessionHandle, SessionStore};

const MISSING_FIELDS: &str = "Enter both username and password.";

fn validate_login_input(username: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginCredentials { username: username.to_owned(), password: password.to_owned() })
}

/// Why [`submit_login`] did not leave a signed-in session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The login call itself failed; the store was not touched.
    #[error(transparent)]
    Rejected(#[from] DispatchError),

    /// The backend accepted the credentials but the follow-up check did not
    /// find a session (cookie blocked, `/user/me` refused it).
    #[error("login accepted but no session was established")]
    SessionNotEstablished,
}

fn login_failure_notice(err: &LoginError) -> String {
    match err {
        LoginError::Rejected(DispatchError::Http { message, .. }) => format!("Login failed: {message}"),
        LoginError::Rejected(DispatchError::Network { .. }) => {
            "Login failed: the server could not be reached.".to_owned()
        }
        LoginError::Rejected(DispatchError::Parse { .. } | DispatchError::Encode { .. }) => {
            "Login failed: unexpected response from the server.".to_owned()
        }
        LoginError::SessionNotEstablished => {
            "Login failed: the server accepted the credentials but no session was kept. Check that cookies are enabled."
                .to_owned()
        }
    }
}

/// Log in, then re-resolve the session.
///
/// The store is only touched after the backend accepted the credentials.
///
/// # Errors
///
/// - [`LoginError::Rejected`] with the dispatcher error from the login call.
/// - [`LoginError::SessionNotEstablished`] when the re-check does not end
///   authenticated.
pub async fn submit_login(
    dispatcher: &Dispatcher,
    store: &SessionStore,
    credentials: &LoginCredentials,
) -> Result<(), LoginError> {
    api::login(dispatcher, credentials).await?;
    store.confirm_session().await;
    if store.snapshot().is_authenticated() {
        Ok(())
    } else {
        Err(LoginError::SessionNotEstablished)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let dispatcher = expect_context::<DispatcherHandle>();
    let store = expect_context::<SessionHandle>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        notice.update(NoticeState::clear);

        let dispatcher = dispatcher.get_value();
        let store = store.get_value();
        leptos::task::spawn_local(async move {
            match submit_login(&dispatcher, &store, &credentials).await {
                Ok(()) => {
                    password.set(String::new());
                    info.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    let message = login_failure_notice(&e);
                    match e {
                        // The re-check remounted this page; only the app banner is still visible.
                        LoginError::SessionNotEstablished => notice.update(|n| n.show(message)),
                        LoginError::Rejected(_) => info.set(message),
                    }
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
