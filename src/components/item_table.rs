//! Table of the signed-in user's items with per-row delete.

use leptos::prelude::*;

use crate::state::items::{ItemsState, description_label, quantity_label};

#[component]
pub fn ItemTable(items: RwSignal<ItemsState>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|s| !s.items.is_empty())
            fallback=|| view! { <p class="item-table__empty">"No items yet."</p> }
        >
            <table class="item-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Quantity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.with(|s| s.items.clone())
                        key=|item| item.id.clone()
                        children=move |item| {
                            let id = item.id.clone();
                            let row_id = id.clone();
                            view! {
                                <tr class="item-table__row">
                                    <td>{item.name.clone()}</td>
                                    <td>{description_label(&item).to_owned()}</td>
                                    <td>{quantity_label(&item)}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger"
                                            disabled=move || items.with(|s| s.is_deleting(&row_id))
                                            on:click=move |_| on_delete.run(id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
