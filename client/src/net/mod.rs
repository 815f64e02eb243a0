//! Networking for the auth REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport and `types` defines the wire schema. The
//! browser always addresses same-origin `/api/...` paths; the server forwards
//! them to the configured backend.

pub mod api;
pub mod types;
