//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`) so pages can depend
//! on small focused models and tests can swap the browser-bound pieces.

pub mod auth;
pub mod session;
pub mod toast;
