//! Fixed-position stack rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Renders every visible toast; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li
                            class=toast_class(toast.level)
                            role="status"
                            on:click=move |_| {
                                toasts.update(|s| {
                                    s.dismiss(id);
                                });
                            }
                        >
                            {toast.message}
                        </li>
                    }
                }
            />
        </ol>
    }
}

fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    }
}
