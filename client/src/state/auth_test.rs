use std::cell::RefCell;

use futures::executor::block_on;
use serde::Serialize;

use super::*;
use crate::net::api::TransportError;
use crate::state::session::MemorySessionStore;

// =============================================================
// Fakes
// =============================================================

struct FakeTransport {
    reply: Result<RawResponse, TransportError>,
    calls: RefCell<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(RawResponse::new(status, body)), calls: RefCell::new(Vec::new()) }
    }

    fn unreachable() -> Self {
        Self { reply: Err(TransportError("connection refused".to_owned())), calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl AuthTransport for FakeTransport {
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<RawResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_value(body).unwrap();
        self.calls.borrow_mut().push((path.to_owned(), json));
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_owned());
    }

    fn notify_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    fn go(&self) -> impl Fn(&str) + '_ {
        move |path: &str| self.visits.borrow_mut().push(path.to_owned())
    }
}

fn login() -> Credentials {
    Credentials::login("a@b.com", "x")
}

fn signup() -> Credentials {
    Credentials::signup("Ada", "ada@example.com", "secret")
}

// =============================================================
// resolve_error_message
// =============================================================

#[test]
fn structured_message_is_used_verbatim() {
    let body = ErrorBody { message: Some("Invalid credentials".to_owned()) };
    for status in [400, 401, 403, 404, 500] {
        assert_eq!(resolve_error_message(AuthKind::Login, status, Some(&body)), "Invalid credentials");
    }
}

#[test]
fn structured_body_without_message_uses_generic_text() {
    let body = ErrorBody { message: None };
    assert_eq!(
        resolve_error_message(AuthKind::Login, 403, Some(&body)),
        AuthKind::Login.generic_failure_message()
    );
}

#[test]
fn structured_body_with_empty_message_uses_generic_text() {
    let body = ErrorBody { message: Some(String::new()) };
    assert_eq!(
        resolve_error_message(AuthKind::Signup, 400, Some(&body)),
        AuthKind::Signup.generic_failure_message()
    );
}

#[test]
fn unstructured_status_table() {
    for kind in [AuthKind::Login, AuthKind::Signup] {
        assert_eq!(resolve_error_message(kind, 403, None), kind.forbidden_message());
        assert_eq!(resolve_error_message(kind, 404, None), kind.not_found_message());
        assert_eq!(resolve_error_message(kind, 500, None), kind.generic_failure_message());
        assert_eq!(resolve_error_message(kind, 401, None), kind.generic_failure_message());
    }
}

#[test]
fn parse_error_body_rejects_non_json() {
    assert_eq!(parse_error_body("<html>Forbidden</html>"), None);
    assert_eq!(parse_error_body(""), None);
    assert_eq!(
        parse_error_body(r#"{"message":"Email already exists"}"#),
        Some(ErrorBody { message: Some("Email already exists".to_owned()) })
    );
}

#[test]
fn parse_error_body_treats_json_null_as_unstructured() {
    assert_eq!(parse_error_body("null"), None);
}

#[test]
fn parse_error_body_non_object_json_is_structured_without_message() {
    assert_eq!(parse_error_body(r#""oops""#), Some(ErrorBody::default()));
    assert_eq!(parse_error_body("[1,2]"), Some(ErrorBody::default()));
}

#[test]
fn numeric_message_is_surfaced() {
    let err = interpret_response(AuthKind::Login, &RawResponse::new(403, r#"{"message":123}"#)).unwrap_err();
    assert_eq!(err, SubmitError::Rejected { status: 403, message: "123".to_owned() });
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn ok_with_token_yields_token() {
    let token = interpret_response(AuthKind::Login, &RawResponse::new(200, r#"{"token":"abc123"}"#)).unwrap();
    assert_eq!(token.as_str(), "abc123");
}

#[test]
fn ok_without_token_is_missing_token() {
    for body in [r"{}", r#"{"token":null}"#, r#"{"token":""}"#, "not json"] {
        assert_eq!(
            interpret_response(AuthKind::Signup, &RawResponse::new(200, body)),
            Err(SubmitError::MissingToken),
            "body {body:?}"
        );
    }
}

#[test]
fn non_ok_json_is_structured_rejection() {
    let resp = RawResponse::new(401, r#"{"token":null,"message":"Invalid credentials"}"#);
    assert_eq!(
        interpret_response(AuthKind::Login, &resp),
        Err(SubmitError::Rejected { status: 401, message: "Invalid credentials".to_owned() })
    );
}

#[test]
fn non_ok_text_is_unstructured_rejection() {
    let resp = RawResponse::new(404, "Not Found");
    assert_eq!(
        interpret_response(AuthKind::Login, &resp),
        Err(SubmitError::RejectedUnstructured {
            status: 404,
            message: AuthKind::Login.not_found_message().to_owned(),
        })
    );
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn validate_accepts_filled_payloads() {
    assert_eq!(login().validate(), Ok(()));
    assert_eq!(signup().validate(), Ok(()));
}

#[test]
fn validate_names_first_empty_field() {
    assert_eq!(
        Credentials::login("", "").validate(),
        Err(SubmitError::Validation { field: "Email" })
    );
    assert_eq!(
        Credentials::signup("Ada", "ada@example.com", "").validate(),
        Err(SubmitError::Validation { field: "Password" })
    );
    assert_eq!(
        Credentials::signup("", "a", "b").validate().unwrap_err().to_string(),
        "Full name is required."
    );
}

#[test]
fn validate_does_not_check_email_format() {
    assert_eq!(Credentials::login("not-an-email", "x").validate(), Ok(()));
}

#[test]
fn credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::login("a@b.com", "hunter2"));
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================
// submit_credentials
// =============================================================

#[test]
fn submit_posts_login_payload_to_login_endpoint() {
    let transport = FakeTransport::replying(200, r#"{"token":"abc123"}"#);
    let notifier = RecordingNotifier::default();
    block_on(submit_credentials(&transport, &notifier, &login())).unwrap();

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/api/auth/login");
    assert_eq!(calls[0].1, serde_json::json!({ "email": "a@b.com", "password": "x" }));
}

#[test]
fn submit_posts_signup_payload_to_signup_endpoint() {
    let transport = FakeTransport::replying(200, r#"{"token":"t","message":"User registered successfully"}"#);
    let notifier = RecordingNotifier::default();
    block_on(submit_credentials(&transport, &notifier, &signup())).unwrap();

    let calls = transport.calls.borrow();
    assert_eq!(calls[0].0, "/api/auth/signup");
    assert_eq!(
        calls[0].1,
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" })
    );
    assert_eq!(*notifier.successes.borrow(), vec!["Account created successfully!".to_owned()]);
}

#[test]
fn submit_validation_failure_sends_nothing() {
    let transport = FakeTransport::replying(200, r#"{"token":"abc123"}"#);
    let notifier = RecordingNotifier::default();
    let result = block_on(submit_credentials(&transport, &notifier, &Credentials::login("a@b.com", "")));

    assert_eq!(result, Err(SubmitError::Validation { field: "Password" }));
    assert_eq!(transport.call_count(), 0);
    assert!(notifier.errors.borrow().is_empty());
    assert!(notifier.successes.borrow().is_empty());
}

#[test]
fn submit_transport_failure_is_distinct_from_http_failure() {
    let transport = FakeTransport::unreachable();
    let notifier = RecordingNotifier::default();
    let result = block_on(submit_credentials(&transport, &notifier, &login()));

    assert_eq!(
        result,
        Err(SubmitError::Transport { message: "Something went wrong. Please try again later.".to_owned() })
    );
    assert_eq!(*notifier.errors.borrow(), vec!["Something went wrong. Please try again later.".to_owned()]);
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn submit_signup_transport_failure_message() {
    let transport = FakeTransport::unreachable();
    let notifier = RecordingNotifier::default();
    let err = block_on(submit_credentials(&transport, &notifier, &signup())).unwrap_err();
    assert_eq!(err.to_string(), "An unexpected error occurred. Please try again.");
}

#[test]
fn submit_forbidden_message_ignores_payload_contents() {
    for credentials in [
        Credentials::login("a@b.com", "x"),
        Credentials::login("someone@else.org", "a much longer password"),
        Credentials::login("unicode@例え.jp", "пароль"),
    ] {
        let transport = FakeTransport::replying(403, "<html>403 Forbidden</html>");
        let notifier = RecordingNotifier::default();
        let err = block_on(submit_credentials(&transport, &notifier, &credentials)).unwrap_err();
        assert_eq!(err.to_string(), AuthKind::Login.forbidden_message());
        assert_eq!(*notifier.errors.borrow(), vec![AuthKind::Login.forbidden_message().to_owned()]);
    }
}

#[test]
fn submit_not_found_unstructured() {
    let transport = FakeTransport::replying(404, "");
    let notifier = RecordingNotifier::default();
    let err = block_on(submit_credentials(&transport, &notifier, &signup())).unwrap_err();
    assert_eq!(err.to_string(), "Authentication service not found. Please contact support.");
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn login_success_sets_cookie_notifies_and_navigates() {
    let transport = FakeTransport::replying(200, r#"{"token":"abc123"}"#);
    let notifier = RecordingNotifier::default();
    let store = MemorySessionStore::new();
    let nav = RecordingNavigator::default();

    block_on(sign_in(&transport, &notifier, &store, &login(), nav.go())).unwrap();

    assert_eq!(store.cookie_header(), "token=abc123");
    assert_eq!(*notifier.successes.borrow(), vec!["Successfully logged in!".to_owned()]);
    assert!(notifier.errors.borrow().is_empty());
    assert_eq!(*nav.visits.borrow(), vec!["/dashboard".to_owned()]);
}

#[test]
fn sign_in_overwrites_previous_token() {
    let transport = FakeTransport::replying(200, r#"{"token":"fresh"}"#);
    let notifier = RecordingNotifier::default();
    let store = MemorySessionStore::with_cookies("token=stale");
    let nav = RecordingNavigator::default();

    block_on(sign_in(&transport, &notifier, &store, &login(), nav.go())).unwrap();

    assert_eq!(store.read().unwrap().as_str(), "fresh");
}

#[test]
fn signup_forbidden_unstructured_leaves_session_untouched() {
    let transport = FakeTransport::replying(403, "Forbidden");
    let notifier = RecordingNotifier::default();
    let store = MemorySessionStore::with_cookies("token=existing");
    let nav = RecordingNavigator::default();

    let err = block_on(sign_in(&transport, &notifier, &store, &signup(), nav.go())).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Access forbidden. This might be a security restriction or a temporary issue with the server."
    );
    assert_eq!(store.cookie_header(), "token=existing");
    assert!(nav.visits.borrow().is_empty());
}

#[test]
fn ok_without_token_writes_nothing_and_stays() {
    let transport = FakeTransport::replying(200, r#"{"message":"User registered successfully"}"#);
    let notifier = RecordingNotifier::default();
    let store = MemorySessionStore::new();
    let nav = RecordingNavigator::default();

    let err = block_on(sign_in(&transport, &notifier, &store, &signup(), nav.go())).unwrap_err();

    assert_eq!(err, SubmitError::MissingToken);
    assert_eq!(store.read(), None);
    assert_eq!(store.cookie_header(), "");
    assert!(nav.visits.borrow().is_empty());
    assert_eq!(notifier.errors.borrow().len(), 1);
}

#[test]
fn sign_out_clears_and_returns_to_login() {
    let store = MemorySessionStore::with_cookies("token=abc123");
    let nav = RecordingNavigator::default();

    sign_out(&store, nav.go());

    assert_eq!(store.read(), None);
    assert_eq!(*nav.visits.borrow(), vec!["/login".to_owned()]);
}
