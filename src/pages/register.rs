//! Registration page. A new account still has to sign in afterwards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::submit_form;
use crate::components::form_fields::{FormError, SubmitButton, TextField};
use crate::services;
use crate::session::AppSession;
use crate::state::form::FormState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = session.api();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        let call = async move { services::auth::register(&*api, &email, &password).await };

        let navigate = navigate.clone();
        submit_form(form, call, move || navigate("/login", NavigateOptions::default()));
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Sign Up"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and password below to create your account."
                </p>
                <TextField id="email" label="Email" kind="email" placeholder="m@example.com" value=email form=form/>
                <TextField id="password" label="Password" kind="password" value=password form=form/>
                <SubmitButton label="Sign Up" pending_label="Signing up..." form=form/>
                <FormError form=form/>
                <p class="auth-card__footer">
                    <A href="/login">"Back to login"</A>
                </p>
            </form>
        </div>
    }
}
