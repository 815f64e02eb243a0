//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for backend forwarding and the backend origin.
//! Clone is required by Axum; both fields are cheap to clone.

use std::sync::Arc;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing `/`.
    pub api_url: Arc<str>,
}

impl AppState {
    /// Build state forwarding to `api_url`.
    ///
    /// Redirects from the backend are passed through to the browser instead of
    /// being followed. No request timeout is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend
    /// initialization).
    pub fn new(api_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_url: Arc::from(api_url) })
    }
}
