//! Form building blocks shared by the auth and item pages.
//!
//! DESIGN
//! ======
//! Every field renders its own validation messages from the page's
//! [`FormState`]; form-level messages render once near the submit button.

use leptos::prelude::*;

use crate::state::form::FormState;

/// Labelled input bound to `value`, with its field errors underneath.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
            </label>
            <input
                class="form-field__input"
                id=id
                name=id
                type=kind
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError form=form field=id/>
        </div>
    }
}

/// Validation messages for one field.
#[component]
pub fn FieldError(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.field_errors(field))
            .into_iter()
            .map(|message| view! { <p class="field-error">{message}</p> })
            .collect_view()
    }
}

/// Server, network, or operation message for the whole form.
#[component]
pub fn FormError(form: RwSignal<FormState>) -> impl IntoView {
    move || {
        form.with(FormState::form_error).map(|message| {
            view! {
                <div class="form-error" role="alert">
                    <p>{message}</p>
                </div>
            }
        })
    }
}

/// Confirmation text carried by a successful result.
#[component]
pub fn FormNotice(form: RwSignal<FormState>) -> impl IntoView {
    move || {
        form.with(FormState::success_message).map(|message| {
            view! {
                <div class="form-notice">
                    <p>{message}</p>
                </div>
            }
        })
    }
}

/// Submit button that disables itself and swaps its label while in flight.
#[component]
pub fn SubmitButton(label: &'static str, pending_label: &'static str, form: RwSignal<FormState>) -> impl IntoView {
    let pending = move || form.with(|f| f.pending);
    view! {
        <button class="btn btn--primary form-submit" type="submit" disabled=pending>
            {move || if pending() { pending_label } else { label }}
        </button>
    }
}
