//! Dashboard page: the only session-protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs the route guard on mount. Until the guard reports an
//! authenticated session nothing below the guard is rendered, so the server
//! render and a signed-out visitor both see an empty shell.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_widgets::{NavItem, ProjectItem, StatCard};
use crate::state::auth::sign_out;
use crate::state::session::BrowserSessionStore;
use crate::util::auth::install_route_guard;

/// Greeting name shown until the backend exposes a profile endpoint.
const PLACEHOLDER_DISPLAY_NAME: &str = "Alex Rivers";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let guard = install_route_guard(BrowserSessionStore, use_navigate());

    view! {
        <Show when=move || guard.get().allows_render()>
            <DashboardBody/>
        </Show>
    }
}

/// Everything below the guard: sidebar, header and overview panels.
#[component]
fn DashboardBody() -> impl IntoView {
    let navigate = use_navigate();
    let on_sign_out = move |_| {
        sign_out(&BrowserSessionStore, |path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <div class="brand">
                    <span class="brand__mark"></span>
                    <span class="brand__name">"Vortex"</span>
                </div>
                <nav class="dashboard__nav">
                    <NavItem label="Overview" active=true/>
                    <NavItem label="Projects"/>
                    <NavItem label="Team"/>
                    <NavItem label="Settings"/>
                </nav>
                <button class="dashboard__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </aside>
            <main class="dashboard__main">
                <header class="dashboard__header">
                    <input class="dashboard__search" type="text" placeholder="Search anything..."/>
                </header>
                <section class="dashboard__content">
                    <div class="dashboard__heading">
                        <div>
                            <p class="dashboard__greeting">
                                {format!("Good morning, {PLACEHOLDER_DISPLAY_NAME}")}
                            </p>
                            <h1>"Project Overview"</h1>
                        </div>
                        <button class="button button--primary">"New Project"</button>
                    </div>
                    <div class="dashboard__stats">
                        <StatCard label="Total Deployments" value="1,284" change="+12.5%"/>
                        <StatCard label="Active Projects" value="42" change="+3"/>
                        <StatCard label="Uptime Score" value="99.99%" change="Optimal"/>
                    </div>
                    <div class="dashboard__panels">
                        <div class="panel">
                            <h3>"Recent Projects"</h3>
                            <ProjectItem name="Vortex Website" status="Production" last_update="2m ago"/>
                            <ProjectItem name="API Service" status="Development" last_update="15m ago"/>
                            <ProjectItem name="Mobile App" status="Preview" last_update="1h ago"/>
                            <ProjectItem name="Documentation" status="Production" last_update="3h ago"/>
                        </div>
                        <div class="panel panel--dark">
                            <h3>"Upgrade to Pro"</h3>
                            <p>"Unlock advanced analytics and priority deployments."</p>
                            <button class="button button--light">"Learn more"</button>
                        </div>
                    </div>
                </section>
            </main>
        </div>
    }
}
