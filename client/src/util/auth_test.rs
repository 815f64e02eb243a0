use std::cell::RefCell;

use super::*;
use crate::state::session::{MemorySessionStore, SessionToken};

#[test]
fn guard_state_default_is_pending() {
    assert_eq!(GuardState::default(), GuardState::Pending);
    assert!(!GuardState::Pending.allows_render());
}

#[test]
fn only_authenticated_allows_render() {
    assert!(GuardState::Authenticated.allows_render());
    assert!(!GuardState::Unauthenticated.allows_render());
}

#[test]
fn check_session_empty_store_is_unauthenticated() {
    assert_eq!(check_session(&MemorySessionStore::new()), GuardState::Unauthenticated);
}

#[test]
fn check_session_accepts_any_non_empty_token() {
    for raw in ["abc123", "not-a-jwt", "!!"] {
        let store = MemorySessionStore::new();
        store.write(&SessionToken::new(raw).unwrap());
        assert_eq!(check_session(&store), GuardState::Authenticated);
    }
}

#[test]
fn empty_store_redirects_to_login() {
    let visits = RefCell::new(Vec::new());
    let state = apply_route_guard(&MemorySessionStore::new(), |path| visits.borrow_mut().push(path.to_owned()));

    assert_eq!(state, GuardState::Unauthenticated);
    assert!(!state.allows_render());
    assert_eq!(*visits.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn cleared_store_redirects_to_login() {
    let store = MemorySessionStore::with_cookies("token=abc123");
    store.clear();
    let visits = RefCell::new(Vec::new());
    let state = apply_route_guard(&store, |path| visits.borrow_mut().push(path.to_owned()));

    assert_eq!(state, GuardState::Unauthenticated);
    assert_eq!(visits.borrow().len(), 1);
}

#[test]
fn present_token_renders_without_navigation() {
    let store = MemorySessionStore::with_cookies("token=abc123");
    let visits = RefCell::new(Vec::<String>::new());
    let state = apply_route_guard(&store, |path| visits.borrow_mut().push(path.to_owned()));

    assert_eq!(state, GuardState::Authenticated);
    assert!(visits.borrow().is_empty());
}
