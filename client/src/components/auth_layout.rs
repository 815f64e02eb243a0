//! Split layout shared by the login and signup pages.
//!
//! The form column sits on the left; the right column is a decorative quote
//! panel hidden on narrow screens.

use leptos::prelude::*;

use crate::routes::HOME_ROUTE;

#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__form-column">
                <div>
                    <a href=HOME_ROUTE class="auth-page__back">"← Back to home"</a>
                    <div class="auth-page__body">
                        <h1 class="auth-page__title">{title}</h1>
                        <p class="auth-page__subtitle">{subtitle}</p>
                        {children()}
                    </div>
                </div>
                <p class="auth-page__legal">"© 2026 Vortex Inc. Platform for modern engineering."</p>
            </div>
            <div class="auth-page__quote-panel">
                <blockquote>
                    <p>
                        "\"Vortex has completely transformed how our team collaborates on complex systems.\""
                    </p>
                    <footer>
                        <strong>"Sarah Chen"</strong>
                        <span>"Head of Engineering, Vercel"</span>
                    </footer>
                </blockquote>
            </div>
        </div>
    }
}

/// Inline error block rendered below a form.
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="form-error" role="alert">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}
