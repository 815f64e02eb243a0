//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components are presentational: they read shared context and render. Auth
//! decisions stay in `state` and `util`.

pub mod auth_layout;
pub mod dashboard_widgets;
pub mod toaster;
