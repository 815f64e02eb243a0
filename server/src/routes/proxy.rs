//! `/api/*` forwarding to the configured backend origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to same-origin `/api/...` paths. Each request
//! is replayed against `{api_url}{path}?{query}` with its method, body and
//! end-to-end headers; the backend's status, headers and body come back
//! unchanged. Nothing here inspects auth payloads or tokens.
//!
//! ERROR HANDLING
//! ==============
//! A backend that cannot be reached becomes `502 Bad Gateway` with a plain
//! text body, which the client treats as an unstructured failure. A request
//! body over `MAX_REQUEST_BODY_BYTES` is answered `413` and any other
//! unreadable body `400`; neither reaches the backend.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Headers scoped to a single connection (RFC 9110 §7.6.1) plus the ones the
/// HTTP client recomputes for the outgoing request.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    RequestBody(axum::Error),

    #[error("request body exceeds {MAX_REQUEST_BODY_BYTES} bytes")]
    RequestTooLarge,

    #[error("backend request to {url} failed: {source}")]
    Upstream { url: String, source: reqwest::Error },

    #[error("backend response body unreadable: {0}")]
    UpstreamBody(reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            Self::RequestBody(_) => {
                tracing::warn!(error = %self, "rejecting api request");
                (StatusCode::BAD_REQUEST, "Bad Request").into_response()
            }
            Self::RequestTooLarge => {
                tracing::warn!(error = %self, "rejecting api request");
                (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").into_response()
            }
            Self::Upstream { .. } | Self::UpstreamBody(_) => {
                tracing::error!(error = %self, "api forwarding failed");
                (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
            }
        }
    }
}

/// Remove hop-by-hop headers, including any named by `Connection`.
pub(crate) fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();
    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Upstream URL for an incoming `/api/...` path and optional query.
pub(crate) fn upstream_url(api_url: &str, path_and_query: &str) -> String {
    format!("{api_url}{path_and_query}")
}

/// Split the length-limit case out of a failed body read.
fn request_body_error(err: axum::Error) -> ProxyError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        ProxyError::RequestTooLarge
    } else {
        ProxyError::RequestBody(axum::Error::new(inner))
    }
}

/// Forward any `/api/{*path}` request to the backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.api_url, path_and_query);

    let body = axum::body::to_bytes(body, MAX_REQUEST_BODY_BYTES)
        .await
        .map_err(request_body_error)?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    if let Some(host) = headers.remove(header::HOST) {
        headers.insert(HeaderName::from_static("x-forwarded-host"), host);
    }

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|source| ProxyError::Upstream { url: url.clone(), source })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);
    let bytes = upstream.bytes().await.map_err(ProxyError::UpstreamBody)?;

    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "api request forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
