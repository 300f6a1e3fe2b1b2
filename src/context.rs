//! Application Context
//!
//! Client state and the actions that talk to the server, provided via the
//! Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use kv_sync::{send_delete, send_submission, ChangeNotification, ItemsApi, RowId};

use crate::api::HttpApi;
use crate::config::ClientConfig;
use crate::socket::ChangeStream;
use crate::store::{store_apply_change, store_replace_rows, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    fn api(&self) -> HttpApi {
        HttpApi::new(self.config.with_value(|c| c.api_base.clone()))
    }

    /// Open the change socket and apply every notification it delivers.
    pub fn listen_for_changes(&self) {
        let store = self.store;
        let url = self.config.with_value(|c| c.socket_url.clone());
        match ChangeStream::connect(&url) {
            Ok(stream) => spawn_local(stream.run(move |notification: ChangeNotification| {
                log::debug!("applying {:?}", notification);
                store_apply_change(&store, &notification);
            })),
            Err(e) => log::error!("{}", e),
        }
    }

    /// Pull the full map and rebuild every row
    pub fn refresh(&self) {
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            match api.list_items().await {
                Ok(snapshot) => {
                    store_replace_rows(&store, snapshot);
                    log::info!("loaded {} items", store.rows().read_untracked().len());
                }
                Err(e) => log::error!("refresh failed: {}", e),
            }
        });
    }

    /// Load a row into the form for editing
    pub fn edit_row(&self, id: RowId) {
        let Some(row) = self.store.rows().read_untracked().get(id).cloned() else {
            return;
        };
        self.store.form().write().begin_edit(row.key, row.value);
    }

    /// Delete the item behind a row; the row goes once the server agrees.
    pub fn delete_row(&self, id: RowId) {
        let Some(key) = self.store.rows().read_untracked().get(id).map(|r| r.key.clone()) else {
            return;
        };
        let store = self.store;
        let api = self.api();
        spawn_local(async move {
            let (key, result) = send_delete(&api, key).await;
            if let Err(e) = store.rows().write().finish_delete(&key, result) {
                log::error!("delete {:?} failed: {}", key, e);
            }
        });
    }

    /// Send the form as a create or update; the list itself changes only
    /// when the server's notification arrives.
    pub fn submit_form(&self) {
        let store = self.store;
        let api = self.api();
        let form = store.form().read_untracked().clone();
        spawn_local(async move {
            let Some((submission, result)) = send_submission(&api, &form).await else {
                return;
            };
            if let Err(e) = store.form().write().finish_submit(result) {
                log::error!("saving {:?} failed: {}", submission.key(), e);
            }
        });
    }
}
