//! Route guard for session-protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes install the guard once per mount. After the first render
//! pass it reads the session store: no token means a redirect to `/login`,
//! any token means the page may render. The token is not checked with the
//! backend and the guard does not re-run while the page stays mounted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::LOGIN_ROUTE;
use crate::state::session::SessionStore;

/// Guard outcome for the current mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// The session has not been checked yet (server render, first paint).
    #[default]
    Pending,
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    #[must_use]
    pub fn allows_render(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Presence check only.
#[must_use]
pub fn check_session<S: SessionStore + ?Sized>(store: &S) -> GuardState {
    if store.read().is_some() { GuardState::Authenticated } else { GuardState::Unauthenticated }
}

/// Check the session and redirect to the login route when it is absent.
pub fn apply_route_guard<S, F>(store: &S, navigate: F) -> GuardState
where
    S: SessionStore + ?Sized,
    F: Fn(&str),
{
    let state = check_session(store);
    if state == GuardState::Unauthenticated {
        navigate(LOGIN_ROUTE);
    }
    state
}

/// Run the guard once after the first render and expose its outcome.
///
/// Protected content should render only while the returned signal reports
/// `GuardState::Authenticated`.
pub fn install_route_guard<S, F>(store: S, navigate: F) -> RwSignal<GuardState>
where
    S: SessionStore + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    let guard = RwSignal::new(GuardState::Pending);
    Effect::new(move || {
        let state = apply_route_guard(&store, |path| navigate(path, NavigateOptions::default()));
        guard.set(state);
    });
    guard
}
