//! Login page: username/password sign-in.

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
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (api, tokens) = (session.api(), session.tokens());
        let (username, password) = (username.get_untracked(), password.get_untracked());
        let call = async move { services::auth::login(&*api, &*tokens, &username, &password).await };

        let session = session.clone();
        let navigate = navigate.clone();
        submit_form(form, call, move || {
            session.refresh();
            navigate("/dashboard", NavigateOptions::default());
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Login"</h1>
                <p class="auth-card__subtitle">"Enter your email below to log in to your account."</p>
                <TextField id="username" label="Username" kind="email" placeholder="m@example.com" value=username form=form/>
                <TextField id="password" label="Password" kind="password" value=password form=form/>
                <p class="auth-card__aside">
                    <A href="/password-recovery">"Forgot your password?"</A>
                </p>
                <SubmitButton label="Sign In" pending_label="Signing in..." form=form/>
                <FormError form=form/>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
