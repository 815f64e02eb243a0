//! Credential submission and session hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and signup pages collect a `Credentials` payload and call
//! `sign_in`. One `POST` goes to the kind's endpoint; the response is turned
//! into either a `SessionToken` or a user-facing `SubmitError`, the notifier
//! is told about the outcome, and on success the token is written to the
//! session store before navigating to the dashboard.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses resolve their message in a fixed order: the `message`
//! field of a JSON body, then (only if the body is not JSON) a status-keyed
//! text for 403/404, then the kind's generic failure text. The `Display` of
//! every `SubmitError` is the exact text shown to the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{AuthTransport, LOGIN_ENDPOINT, SIGNUP_ENDPOINT};
use crate::net::types::{AuthResponse, ErrorBody, LoginRequest, RawResponse, SignupRequest};
use crate::routes::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::state::session::{SessionStore, SessionToken};
use crate::state::toast::Notifier;

// =============================================================================
// KIND
// =============================================================================

/// Which auth endpoint a submission targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Signup,
}

impl AuthKind {
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => LOGIN_ENDPOINT,
            Self::Signup => SIGNUP_ENDPOINT,
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Successfully logged in!",
            Self::Signup => "Account created successfully!",
        }
    }

    /// Fallback for non-OK responses without a usable message.
    #[must_use]
    pub fn generic_failure_message(self) -> &'static str {
        match self {
            Self::Login => "The credentials you entered are incorrect.",
            Self::Signup => "Signup failed. Please check your details and try again.",
        }
    }

    #[must_use]
    pub fn forbidden_message(self) -> &'static str {
        match self {
            Self::Login => {
                "Access forbidden. Please ensure you are using a supported browser or check your connection."
            }
            Self::Signup => {
                "Access forbidden. This might be a security restriction or a temporary issue with the server."
            }
        }
    }

    #[must_use]
    pub fn not_found_message(self) -> &'static str {
        match self {
            Self::Login => "Login service not found. Please contact support.",
            Self::Signup => "Authentication service not found. Please contact support.",
        }
    }

    #[must_use]
    pub fn transport_failure_message(self) -> &'static str {
        match self {
            Self::Login => "Something went wrong. Please try again later.",
            Self::Signup => "An unexpected error occurred. Please try again.",
        }
    }
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Transient form payload. Lives only for the duration of one submission.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login(req) => f.debug_struct("Login").field("email", &req.email).finish_non_exhaustive(),
            Self::Signup(req) => f
                .debug_struct("Signup")
                .field("name", &req.name)
                .field("email", &req.email)
                .finish_non_exhaustive(),
        }
    }
}

impl Credentials {
    #[must_use]
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login(LoginRequest { email: email.into(), password: password.into() })
    }

    #[must_use]
    pub fn signup(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Signup(SignupRequest { name: name.into(), email: email.into(), password: password.into() })
    }

    #[must_use]
    pub fn kind(&self) -> AuthKind {
        match self {
            Self::Login(_) => AuthKind::Login,
            Self::Signup(_) => AuthKind::Signup,
        }
    }

    /// Every field is required. No format checks are applied.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), SubmitError> {
        let missing = match self {
            Self::Login(req) => first_empty(&[("Email", req.email.as_str()), ("Password", req.password.as_str())]),
            Self::Signup(req) => first_empty(&[
                ("Full name", req.name.as_str()),
                ("Email", req.email.as_str()),
                ("Password", req.password.as_str()),
            ]),
        };
        match missing {
            Some(field) => Err(SubmitError::Validation { field }),
            None => Ok(()),
        }
    }
}

fn first_empty(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields.iter().find(|(_, value)| value.is_empty()).map(|(field, _)| *field)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Why a submission did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A required field was empty; no request was sent.
    #[error("{field} is required.")]
    Validation { field: &'static str },

    /// Non-OK status with a JSON error body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Non-OK status whose body was not JSON.
    #[error("{message}")]
    RejectedUnstructured { status: u16, message: String },

    /// The request never completed.
    #[error("{message}")]
    Transport { message: String },

    /// OK status but no usable token in the body.
    #[error("The server did not return a session. Please try again.")]
    MissingToken,
}

/// Parse a non-OK body as a structured error.
///
/// `None` means the body is not JSON, or is JSON `null`. Any other JSON value
/// counts as structured; only an object can carry a `message`.
#[must_use]
pub fn parse_error_body(body: &str) -> Option<ErrorBody> {
    match serde_json::from_str::<serde_json::Value>(body).ok()? {
        serde_json::Value::Null => None,
        value @ serde_json::Value::Object(_) => Some(serde_json::from_value(value).unwrap_or_default()),
        _ => Some(ErrorBody::default()),
    }
}

/// Pick the user-facing message for a non-OK response.
#[must_use]
pub fn resolve_error_message(kind: AuthKind, status: u16, parsed: Option<&ErrorBody>) -> String {
    match parsed {
        Some(body) => body
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(kind.generic_failure_message())
            .to_owned(),
        None => match status {
            403 => kind.forbidden_message(),
            404 => kind.not_found_message(),
            _ => kind.generic_failure_message(),
        }
        .to_owned(),
    }
}

/// Map a completed exchange to a token or a rejection.
///
/// # Errors
///
/// `Rejected`/`RejectedUnstructured` for non-OK statuses, `MissingToken` for
/// an OK status without a non-empty `token` field.
pub fn interpret_response(kind: AuthKind, resp: &RawResponse) -> Result<SessionToken, SubmitError> {
    if resp.ok() {
        return serde_json::from_str::<AuthResponse>(&resp.body)
            .ok()
            .and_then(|body| body.token)
            .and_then(SessionToken::new)
            .ok_or(SubmitError::MissingToken);
    }

    match parse_error_body(&resp.body) {
        Some(body) => Err(SubmitError::Rejected {
            status: resp.status,
            message: resolve_error_message(kind, resp.status, Some(&body)),
        }),
        None => Err(SubmitError::RejectedUnstructured {
            status: resp.status,
            message: resolve_error_message(kind, resp.status, None),
        }),
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// Send one submission and report the outcome to `notifier`.
///
/// Validation failures return before any request and are not reported to the
/// notifier; the form shows them inline. No retry is attempted.
///
/// # Errors
///
/// Any `SubmitError`; see the type for the taxonomy.
pub async fn submit_credentials<T, N>(
    transport: &T,
    notifier: &N,
    credentials: &Credentials,
) -> Result<SessionToken, SubmitError>
where
    T: AuthTransport + ?Sized,
    N: Notifier + ?Sized,
{
    credentials.validate()?;
    let kind = credentials.kind();

    let sent = match credentials {
        Credentials::Login(req) => transport.post_json(kind.endpoint(), req).await,
        Credentials::Signup(req) => transport.post_json(kind.endpoint(), req).await,
    };

    let result = match sent {
        Ok(resp) => interpret_response(kind, &resp),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("{} request failed: {e}", kind.endpoint());
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Err(SubmitError::Transport { message: kind.transport_failure_message().to_owned() })
        }
    };

    match &result {
        Ok(_) => notifier.notify_success(kind.success_message()),
        Err(e) => notifier.notify_error(&e.to_string()),
    }
    result
}

/// Submit credentials, persist the issued token and navigate to the dashboard.
///
/// On any error the session store is left untouched and `navigate` is not
/// called.
///
/// # Errors
///
/// Propagates the `SubmitError` from `submit_credentials`.
pub async fn sign_in<T, N, S, F>(
    transport: &T,
    notifier: &N,
    store: &S,
    credentials: &Credentials,
    navigate: F,
) -> Result<(), SubmitError>
where
    T: AuthTransport + ?Sized,
    N: Notifier + ?Sized,
    S: SessionStore + ?Sized,
    F: Fn(&str),
{
    let token = submit_credentials(transport, notifier, credentials).await?;
    store.write(&token);
    navigate(DASHBOARD_ROUTE);
    Ok(())
}

/// Drop the session and return to the login page.
pub fn sign_out<S, F>(store: &S, navigate: F)
where
    S: SessionStore + ?Sized,
    F: Fn(&str),
{
    store.clear();
    navigate(LOGIN_ROUTE);
}
