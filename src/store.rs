//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use kv_sync::{ChangeNotification, FormState, RowSet, Snapshot};

/// Client state for the page lifetime
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered rows, keyed by item key
    pub rows: RowSet,
    /// Create/edit form
    pub form: FormState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rebuild every row from a full snapshot
pub fn store_replace_rows(store: &AppStore, snapshot: Snapshot) {
    store.rows().write().replace_all(snapshot);
}

/// Patch rows with one pushed change
pub fn store_apply_change(store: &AppStore, notification: &ChangeNotification) {
    store.rows().write().apply(notification);
}
