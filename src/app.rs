//! KV Live App
//!
//! Root component: live item list plus the create/edit form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Socket first, as the page always did. Nothing orders the two: a change
    // applied before the snapshot lands is overwritten by it.
    Effect::new(move |_| {
        ctx.listen_for_changes();
        ctx.refresh();
    });

    view! {
        <main class="app">
            <h1>"Items"</h1>

            <ItemForm />

            <Show
                when=move || !store.rows().read().is_empty()
                fallback=|| view! { <p class="empty">"No items yet"</p> }
            >
                <ItemList />
            </Show>

            <p class="item-count">{move || format!("{} items", store.rows().read().len())}</p>
        </main>
    }
}
