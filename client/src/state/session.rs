//! Session token storage in the document cookie store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues an opaque bearer token on login/signup. The browser keeps
//! it in a single `token` cookie; the dashboard route guard only checks that the
//! cookie is present. Nothing here decodes or verifies the token.
//!
//! DESIGN
//! ======
//! `SessionStore` is the seam between the auth flow and the cookie jar.
//! `BrowserSessionStore` talks to `document.cookie`; `MemorySessionStore` keeps
//! an in-process `cookie::CookieJar` with the same expiry semantics so flows can
//! run outside a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::fmt;

use cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

/// Cookie key holding the session token.
pub const TOKEN_COOKIE: &str = "token";

// =============================================================================
// TOKEN
// =============================================================================

/// Opaque session token. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token value. Returns `None` for an empty string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

// =============================================================================
// COOKIE FORMAT
// =============================================================================

/// `token=<value>; SameSite=Lax; Secure; Path=/` with no expiry, so the cookie
/// lives for the browser session.
#[must_use]
pub fn session_cookie(token: &SessionToken) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token.as_str().to_owned()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(true)
        .build()
}

/// Empty `token` cookie that expired one second after the Unix epoch.
#[must_use]
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH + Duration::seconds(1))
        .build()
}

/// Find a non-empty `token` entry in a `document.cookie`-style header
/// (`a=1; token=abc; b=2`). Malformed pairs are skipped.
#[must_use]
pub fn token_from_cookie_header(header: &str) -> Option<SessionToken> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == TOKEN_COOKIE)
        .and_then(|c| SessionToken::new(c.value()))
}

// =============================================================================
// STORE
// =============================================================================

/// Read/write access to the single session token.
pub trait SessionStore {
    /// Persist `token`, replacing any previous value.
    fn write(&self, token: &SessionToken);

    /// Current token, if one is stored and non-empty.
    fn read(&self) -> Option<SessionToken>;

    /// Drop the stored token.
    fn clear(&self);
}

/// Session store backed by the browser's `document.cookie`.
///
/// Outside the `hydrate` build there is no document: reads return `None` and
/// writes are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn assign_document_cookie(cookie: &Cookie<'_>) {
    let Some(doc) = html_document() else {
        log::warn!("no document available, session cookie not updated");
        return;
    };
    if let Err(e) = doc.set_cookie(&cookie.to_string()) {
        log::warn!("failed to assign document.cookie: {e:?}");
    }
}

impl SessionStore for BrowserSessionStore {
    fn write(&self, token: &SessionToken) {
        #[cfg(feature = "hydrate")]
        assign_document_cookie(&session_cookie(token));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<SessionToken> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().ok()?;
            token_from_cookie_header(&header)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        assign_document_cookie(&expired_session_cookie());
    }
}

/// In-process cookie jar applying cookies the way a browser does: a cookie
/// whose expiry is already in the past deletes the entry instead of storing it.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    jar: RefCell<CookieJar>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a `document.cookie`-style header.
    #[must_use]
    pub fn with_cookies(header: &str) -> Self {
        let store = Self::new();
        for cookie in Cookie::split_parse(header).filter_map(Result::ok) {
            store.apply(cookie.into_owned());
        }
        store
    }

    /// Apply a cookie assignment.
    pub fn apply(&self, cookie: Cookie<'static>) {
        let expired = cookie
            .expires_datetime()
            .is_some_and(|at| at <= OffsetDateTime::now_utc());
        let mut jar = self.jar.borrow_mut();
        if expired {
            jar.remove(Cookie::from(cookie.name().to_owned()));
        } else {
            jar.add(cookie);
        }
    }

    /// The jar rendered as `document.cookie` would return it: `name=value`
    /// pairs joined by `"; "`, attributes omitted.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        let jar = self.jar.borrow();
        let mut pairs: Vec<String> = jar.iter().map(|c| format!("{}={}", c.name(), c.value())).collect();
        pairs.sort();
        pairs.join("; ")
    }
}

impl SessionStore for MemorySessionStore {
    fn write(&self, token: &SessionToken) {
        self.apply(session_cookie(token));
    }

    fn read(&self) -> Option<SessionToken> {
        token_from_cookie_header(&self.cookie_header())
    }

    fn clear(&self) {
        self.apply(expired_session_cookie());
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn write(&self, token: &SessionToken) {
        (**self).write(token);
    }

    fn read(&self) -> Option<SessionToken> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear();
    }
}
