//! Presentational pieces of the dashboard: sidebar links, stat cards and
//! project rows. All content is static.

#[cfg(test)]
#[path = "dashboard_widgets_test.rs"]
mod dashboard_widgets_test;

use leptos::prelude::*;

#[component]
pub fn NavItem(#[prop(into)] label: String, #[prop(optional)] active: bool) -> impl IntoView {
    let class = if active { "nav-item nav-item--active" } else { "nav-item" };
    view! { <a href="#" class=class>{label}</a> }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] change: String,
) -> impl IntoView {
    let badge = change_badge_class(&change);
    view! {
        <div class="stat-card">
            <span class=badge>{change}</span>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

#[component]
pub fn ProjectItem(
    #[prop(into)] name: String,
    #[prop(into)] status: String,
    #[prop(into)] last_update: String,
) -> impl IntoView {
    let badge = status_badge_class(&status);
    let initial = project_initial(&name);
    view! {
        <div class="project-item">
            <div class="project-item__avatar">{initial}</div>
            <div class="project-item__meta">
                <p class="project-item__name">{name}</p>
                <p class="project-item__updated">{last_update}</p>
            </div>
            <span class=badge>{status}</span>
        </div>
    }
}

/// Positive deltas (`+12.5%`) get the highlighted badge.
pub(crate) fn change_badge_class(change: &str) -> &'static str {
    if change.starts_with('+') { "badge badge--positive" } else { "badge badge--neutral" }
}

pub(crate) fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Production" => "badge badge--production",
        "Development" => "badge badge--development",
        _ => "badge badge--neutral",
    }
}

pub(crate) fn project_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
