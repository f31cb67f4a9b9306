//! Item creation form. Returns to the dashboard once the server accepts it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::submit_form;
use crate::components::form_fields::{FormError, SubmitButton, TextField};
use crate::services;
use crate::session::AppSession;
use crate::state::form::FormState;

#[component]
pub fn AddItemPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (api, tokens) = (session.api(), session.tokens());
        let (name, description, quantity) = (
            name.get_untracked(),
            description.get_untracked(),
            quantity.get_untracked(),
        );
        let call =
            async move { services::items::add_item(&*api, &*tokens, &name, &description, &quantity).await };

        let navigate = navigate.clone();
        submit_form(form, call, move || navigate("/dashboard", NavigateOptions::default()));
    };

    view! {
        <section class="add-item-page">
            <header class="add-item-page__header">
                <h1>"Create New Item"</h1>
                <p>"Enter the details of the new item below."</p>
            </header>
            <form class="add-item-page__form" on:submit=on_submit>
                <TextField id="name" label="Item Name" placeholder="Item name" value=name form=form/>
                <TextField
                    id="description"
                    label="Item Description"
                    placeholder="Description of the item"
                    value=description
                    form=form
                />
                <TextField id="quantity" label="Quantity" kind="number" placeholder="Quantity" value=quantity form=form/>
                <SubmitButton label="Create Item" pending_label="Creating..." form=form/>
                <FormError form=form/>
            </form>
        </section>
    }
}
