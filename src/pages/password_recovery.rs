//! Password recovery page. Stays put after submit and shows the confirmation.

use leptos::prelude::*;
use leptos_router::components::A;

use super::submit_form;
use crate::components::form_fields::{FormError, FormNotice, SubmitButton, TextField};
use crate::services;
use crate::session::AppSession;
use crate::state::form::FormState;

#[component]
pub fn PasswordRecoveryPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let email = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = session.api();
        let email = email.get_untracked();
        let call = async move { services::auth::password_reset_request(&*api, &email).await };
        submit_form(form, call, || {});
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Password Recovery"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email to receive instructions to reset your password."
                </p>
                <TextField id="email" label="Email" kind="email" placeholder="m@example.com" value=email form=form/>
                <SubmitButton label="Send" pending_label="Sending..." form=form/>
                <FormError form=form/>
                <FormNotice form=form/>
                <p class="auth-card__footer">
                    <A href="/login">"Back to login"</A>
                </p>
            </form>
        </div>
    }
}
