//! Transient success/error notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth flow reports every submission outcome through `Notifier`. The app
//! implements it on the shared `RwSignal<ToastState>` context, which the
//! `Toaster` component renders as a stack in the corner of the viewport.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_DURATION_MS: u64 = 4_000;

/// Oldest toasts are dropped once this many are visible.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Fire-and-forget sink for user-facing outcome messages.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Push a toast onto the shared state and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, level: ToastLevel, message: &str) {
    let Some(id) = toasts.try_update(|s| s.push(level, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        toasts.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

impl Notifier for RwSignal<ToastState> {
    fn notify_success(&self, message: &str) {
        show_toast(*self, ToastLevel::Success, message);
    }

    fn notify_error(&self, message: &str) {
        show_toast(*self, ToastLevel::Error, message);
    }
}
