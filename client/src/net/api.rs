//! REST transport for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports a failure since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to complete the exchange are errors here. Any HTTP status,
//! including 4xx/5xx, is a successful exchange and comes back as a
//! `RawResponse` for the auth flow to interpret.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::RawResponse;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

/// The request never produced a response (network down, DNS, CORS, aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

/// HTTP seam for the credential flow.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// `POST` `body` as JSON to `path` and return status plus raw body text.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no response was received.
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<RawResponse, TransportError>
    where
        B: Serialize + ?Sized;
}

/// `fetch`-backed transport addressing same-origin `/api/...` paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl AuthTransport for BrowserTransport {
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<RawResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(path)
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            // An unreadable body is treated like an unparseable one.
            let text = resp.text().await.unwrap_or_default();
            Ok(RawResponse::new(status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(TransportError(not_available_message().to_owned()))
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available_message() -> &'static str {
    "not available on server"
}
