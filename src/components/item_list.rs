//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// All rendered rows, in display order.
///
/// Rows are keyed by row id, so a value change re-renders only the value
/// text of the existing row.
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="items" class="items">
            <For
                each=move || store.rows().read().ids()
                key=|id| *id
                children=move |id| view! { <ItemRow id=id /> }
            />
        </div>
    }
}
