//! Items API Bindings
//!
//! Frontend bindings to the HTTP endpoints of the key/value server.

mod items;

use gloo_net::http::Response;
use kv_sync::{ItemsApi, Snapshot};
use thiserror::Error;

pub use items::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turn a non-2xx response into an error.
fn expect_success(method: &'static str, url: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: response.status(),
        })
    }
}

/// Items API over HTTP at `base` (empty for same origin)
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl ItemsApi for HttpApi {
    type Error = ApiError;

    async fn list_items(&self) -> Result<Snapshot, ApiError> {
        list_items(&self.base).await
    }

    async fn create_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        create_item(&self.base, key, value).await
    }

    async fn update_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        update_item(&self.base, key, value).await
    }

    async fn delete_item(&self, key: &str) -> Result<(), ApiError> {
        delete_item(&self.base, key).await
    }
}
