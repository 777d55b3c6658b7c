//! REST API helpers for the backend's `/user` authentication endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns the dispatcher's typed error unchanged; the session
//! store and the pages decide which failures are expected.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::dispatch::{DispatchError, DispatchOptions, Dispatcher};
use super::types::{LoginCredentials, UserProfile};

pub const USER_ENDPOINT: &str = "/user";

fn user_endpoint(action: &str) -> String {
    format!("{USER_ENDPOINT}/{action}")
}

/// Fetch the current user from `GET /user/me`.
///
/// # Errors
///
/// Returns the dispatcher error, or [`DispatchError::Parse`] when the
/// response carries no profile.
pub async fn fetch_current_user(dispatcher: &Dispatcher) -> Result<UserProfile, DispatchError> {
    dispatcher
        .dispatch::<UserProfile>(&user_endpoint("me"), DispatchOptions::get())
        .await?
        .ok_or_else(|| DispatchError::Parse { cause: "current-user response carried no data".to_owned() })
}

/// Log in with `POST /user/login` (form-encoded). The backend sets the session
/// cookie on success; callers confirm the session afterwards.
///
/// # Errors
///
/// Returns the dispatcher error, e.g. [`DispatchError::Http`] for rejected
/// credentials.
pub async fn login(
    dispatcher: &Dispatcher,
    credentials: &LoginCredentials,
) -> Result<Option<UserProfile>, DispatchError> {
    let body = serde_json::to_value(credentials).map_err(|e| DispatchError::Encode { cause: e.to_string() })?;
    dispatcher
        .dispatch::<UserProfile>(&user_endpoint("login"), DispatchOptions::post().form(body))
        .await
}

/// Log out with `POST /user/logout` (no body).
///
/// # Errors
///
/// Returns the dispatcher error when the backend could not confirm.
pub async fn logout(dispatcher: &Dispatcher) -> Result<(), DispatchError> {
    dispatcher
        .dispatch::<serde_json::Value>(&user_endpoint("logout"), DispatchOptions::post())
        .await
        .map(|_| ())
}
