//! Login page: email + password form posting to `/api/auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{AuthLayout, FormError};
use crate::net::api::BrowserTransport;
use crate::routes::SIGNUP_ROUTE;
use crate::state::auth::{Credentials, sign_in};
use crate::state::session::BrowserSessionStore;
use crate::state::toast::ToastState;

/// Run one submission in the background, mirroring its progress into the
/// form's `busy` and `error` signals.
///
/// Overlapping submissions are not coalesced; the submit button is disabled
/// while `busy` is set.
pub(crate) fn spawn_sign_in<F>(
    credentials: Credentials,
    toasts: RwSignal<ToastState>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    error.set(None);
    busy.set(true);

    leptos::task::spawn_local(async move {
        let go = |path: &str| navigate(path, NavigateOptions::default());
        if let Err(e) = sign_in(&BrowserTransport, &toasts, &BrowserSessionStore, &credentials, go).await {
            error.set(Some(e.to_string()));
        }
        busy.set(false);
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = Credentials::login(email.get_untracked(), password.get_untracked());
        spawn_sign_in(credentials, toasts, busy, error, navigate.clone());
    };

    view! {
        <AuthLayout
            title="Welcome back."
            subtitle="Sign in to your Vortex account to continue building your future."
        >
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <FormError error=error/>
            <p class="auth-page__switch">
                "New here? "
                <a href=SIGNUP_ROUTE>"Create an account"</a>
            </p>
        </AuthLayout>
    }
}
