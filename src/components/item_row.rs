//! Item Row Component
//!
//! One key/value row with its delete control.

use leptos::prelude::*;
use kv_sync::{Row, RowId};

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// One field of a row, memoized so its text node is only written when that
/// field of that row changes.
fn row_field(store: AppStore, id: RowId, field: fn(&Row) -> &str) -> Memo<String> {
    Memo::new(move |_| {
        store
            .rows()
            .read()
            .get(id)
            .map(|row| field(row).to_string())
            .unwrap_or_default()
    })
}

/// A single item row. Clicking it loads the item into the form.
#[component]
pub fn ItemRow(id: RowId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let key = row_field(store, id, |row| &row.key);
    let value = row_field(store, id, |row| &row.value);

    view! {
        <div class="item" on:click=move |_| ctx.edit_row(id)>
            <strong>{key}</strong>
            ": "
            <span>{value}</span>
            " "
            <button
                class="del"
                on:click=move |ev| {
                    // Keep the row click from switching the form to edit
                    ev.stop_propagation();
                    ctx.delete_row(id);
                }
            >
                "Delete"
            </button>
        </div>
    }
}
