//! Public landing page.

use leptos::prelude::*;

use crate::routes::{LOGIN_ROUTE, SIGNUP_ROUTE};

const TRUSTED_BY: [&str; 6] = ["Stripe", "Vercel", "Linear", "GitHub", "Replit", "Notion"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <nav class="home__nav">
                <div class="brand">
                    <span class="brand__mark"></span>
                    <span class="brand__name">"Vortex"</span>
                </div>
                <div class="home__links">
                    <a href="#features">"Features"</a>
                    <a href="#pricing">"Pricing"</a>
                    <a href="#about">"About"</a>
                </div>
                <div class="home__actions">
                    <a href=LOGIN_ROUTE>"Sign in"</a>
                    <a href=SIGNUP_ROUTE class="button button--primary">"Get Started"</a>
                </div>
            </nav>

            <section class="hero">
                <span class="hero__badge">"Now in Private Beta"</span>
                <h1>"The workspace for " <br/> <span class="hero__accent">"modern engineering."</span></h1>
                <p>
                    "Vortex brings your team together in a unified, high-performance environment. "
                    "Ship faster, stay aligned, and focus on what matters."
                </p>
                <div class="hero__cta">
                    <a href=SIGNUP_ROUTE class="button button--primary">"Start Building Free →"</a>
                    <button class="button button--ghost">"Book a Demo"</button>
                </div>
            </section>

            <section class="social-proof">
                <p>"Trusted by teams worldwide"</p>
                <div class="social-proof__logos">
                    {TRUSTED_BY.iter().map(|name| view! { <div>{*name}</div> }).collect_view()}
                </div>
            </section>

            <section id="features" class="features">
                <h2>"Everything you need to ship."</h2>
                <p>"Powerful tools for the modern developer workflow."</p>
                <div class="features__grid">
                    <FeatureCard
                        title="Lightning Fast"
                        description="Built for speed. Optimized for the best possible developer experience."
                    />
                    <FeatureCard
                        title="Secure by Default"
                        description="Enterprise-grade security and compliance built into every layer."
                    />
                    <FeatureCard
                        title="Beautiful UI"
                        description="A minimalist design that stays out of your way and lets you focus."
                    />
                </div>
            </section>

            <footer class="home__footer">
                <span class="brand__name">"Vortex"</span>
                <div class="home__footer-links">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                    <a href="#">"Twitter"</a>
                </div>
                <p>"© 2026 Vortex Inc."</p>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
