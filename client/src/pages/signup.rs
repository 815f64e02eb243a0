//! Signup page: name + email + password form posting to `/api/auth/signup`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::{AuthLayout, FormError};
use crate::pages::login::spawn_sign_in;
use crate::routes::LOGIN_ROUTE;
use crate::state::auth::Credentials;
use crate::state::toast::ToastState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
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
        let credentials =
            Credentials::signup(name.get_untracked(), email.get_untracked(), password.get_untracked());
        spawn_sign_in(credentials, toasts, busy, error, navigate.clone());
    };

    view! {
        <AuthLayout
            title="Create your account."
            subtitle="Join thousands of developers building the next generation of software."
        >
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__field">
                    <span>"Full Name"</span>
                    <input
                        type="text"
                        placeholder="Enter your full name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                        placeholder="Create a password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <FormError error=error/>
            <p class="auth-page__switch">
                "Already have an account? "
                <a href=LOGIN_ROUTE>"Sign in"</a>
            </p>
        </AuthLayout>
    }
}
