//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware pages read the [`Session`]; only the
//! [`SessionStore`] writes it. The store is injected at the app root and
//! pushes every change to its subscribers.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser event loop. Session checks are not
//! serialized: when two overlap, whichever completes last wins, including a
//! check started by a page that has since unmounted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};

use crate::net::api;
use crate::net::dispatch::{DispatchError, Dispatcher};
use crate::net::types::UserProfile;

/// Where the session check currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Resolving,
    Authenticated,
    Unauthenticated,
}

/// Client-held belief about the current user's authentication.
///
/// `status == Authenticated` exactly when `user` is present; the
/// constructors are the only way to build one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user: Option<UserProfile>,
    status: SessionStatus,
}

impl Session {
    pub fn resolving() -> Self {
        Self { user: None, status: SessionStatus::Resolving }
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self { user: Some(user), status: SessionStatus::Authenticated }
    }

    pub fn unauthenticated() -> Self {
        Self { user: None, status: SessionStatus::Unauthenticated }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&Session)>;

struct StoreInner {
    dispatcher: Dispatcher,
    session: RefCell<Session>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
    initialized: Cell<bool>,
    checks_in_flight: Cell<u32>,
}

/// Sole writer of the [`Session`]. Cloning shares the same store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

/// Context handle for the store; the store itself is not `Send`.
pub type SessionHandle = StoredValue<SessionStore, LocalStorage>;

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.inner.session.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// New store in the `Resolving` state.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                dispatcher,
                session: RefCell::new(Session::resolving()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                initialized: Cell::new(false),
                checks_in_flight: Cell::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.session.borrow().status()
    }

    /// Register `listener` to run after every session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Mount-time session check. Runs once per store.
    pub async fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            leptos::logging::warn!("session store already initialized; ignoring");
            return;
        }
        self.resolve("initialize").await;
    }

    /// Re-run the session check, typically right after a successful login.
    pub async fn confirm_session(&self) {
        self.resolve("confirm").await;
    }

    /// Log out on the backend and clear the local session.
    ///
    /// The local session ends up `Unauthenticated` whatever the backend says.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher error when the backend could not confirm the
    /// logout. The local state has already been cleared by then.
    pub async fn logout(&self) -> Result<(), DispatchError> {
        let outcome = api::logout(&self.inner.dispatcher).await;
        if let Err(e) = &outcome {
            leptos::logging::warn!("logout not confirmed by backend: {e}");
        }
        self.transition(Session::unauthenticated());
        outcome
    }

    async fn resolve(&self, origin: &str) {
        self.transition(Session::resolving());

        let in_flight = self.inner.checks_in_flight.get() + 1;
        self.inner.checks_in_flight.set(in_flight);
        if in_flight > 1 {
            leptos::logging::warn!("overlapping session checks ({in_flight}); last to finish wins");
        }

        let next = match api::fetch_current_user(&self.inner.dispatcher).await {
            Ok(user) => Session::authenticated(user),
            Err(e) => {
                leptos::logging::log!("session check ({origin}): no session: {e}");
                Session::unauthenticated()
            }
        };

        self.inner.checks_in_flight.set(self.inner.checks_in_flight.get().saturating_sub(1));
        self.transition(next);
    }

    fn transition(&self, next: Session) {
        {
            let mut current = self.inner.session.borrow_mut();
            if *current == next {
                return;
            }
            *current = next.clone();
        }
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
