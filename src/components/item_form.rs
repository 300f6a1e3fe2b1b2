//! Item Form Component
//!
//! Key/value form that creates items, or saves the row picked from the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <input
                id="key"
                type="text"
                placeholder="key"
                prop:value=move || store.form().read().key.clone()
                on:input=move |ev| store.form().write().set_key(event_target_value(&ev))
            />
            <input
                id="value"
                type="text"
                placeholder="value"
                prop:value=move || store.form().read().value.clone()
                on:input=move |ev| store.form().write().set_value(event_target_value(&ev))
            />
            <button id="create" type="submit">
                {move || store.form().read().submit_label()}
            </button>
        </form>
    }
}
