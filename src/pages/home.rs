//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Stockroom"</h1>
            <p class="home-page__subtitle">"Keep track of what you have and how many of each."</p>
            <div class="home-page__actions">
                <A href="/login">"Sign In"</A>
                <A href="/register">"Sign Up"</A>
                <A href="/dashboard">"Dashboard"</A>
            </div>
        </div>
    }
}
