//! Dashboard page listing the signed-in user's items.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedRoute`, so a session exists by the time this
//! mounts. Items are fetched on mount and again after every delete; nothing
//! is cached between visits.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::item_table::ItemTable;
use crate::session::AppSession;
use crate::state::items::ItemsState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let items = RwSignal::new(ItemsState::default());

    load_items(&session, items);

    let on_delete = Callback::new(move |id: String| {
        if items.with_untracked(|s| s.deleting.is_some()) {
            return;
        }
        items.update(|s| s.deleting = Some(id.clone()));
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = crate::services::items::remove_item(&*session.api(), &*session.tokens(), &id).await;
                items.update(|s| s.deleting = None);
                match result.form_error() {
                    Some(message) => items.update(|s| s.error = Some(message.to_owned())),
                    None => load_items(&session, items),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = &session;
    });

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Items"</h1>
                <A href="/dashboard/add-item">"+ Add Item"</A>
            </header>
            <Show when=move || items.with(|s| s.error.is_some())>
                <p class="dashboard-page__error">{move || items.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !items.with(|s| s.loading)
                fallback=|| view! { <p class="dashboard-page__loading">"Loading items..."</p> }
            >
                <ItemTable items=items on_delete=on_delete/>
            </Show>
        </section>
    }
}

/// Replace the item list with a fresh server read.
fn load_items(session: &AppSession, items: RwSignal<ItemsState>) {
    items.update(ItemsState::start_loading);
    #[cfg(feature = "csr")]
    {
        let (api, tokens) = (session.api(), session.tokens());
        leptos::task::spawn_local(async move {
            let result = crate::services::items::fetch_items(&*api, &*tokens).await;
            items.update(|s| s.apply_fetch(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = session;
}
