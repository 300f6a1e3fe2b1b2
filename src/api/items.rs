//! Item Endpoints
//!
//! `GET/POST /items`, `PUT/DELETE /items/{key}`.

use gloo_net::http::Request;
use kv_sync::{CreateItemBody, Snapshot, UpdateItemBody};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{expect_success, ApiError};

const ITEMS_PATH: &str = "/items";

/// Characters left unescaped by `encodeURIComponent`
const KEY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// URLs
// ========================

pub fn items_url(base: &str) -> String {
    format!("{base}{ITEMS_PATH}")
}

/// URL of a single item; the key is percent-encoded as one path segment.
pub fn item_url(base: &str, key: &str) -> String {
    format!("{base}{ITEMS_PATH}/{}", utf8_percent_encode(key, KEY_SEGMENT))
}

// ========================
// Requests
// ========================

pub async fn list_items(base: &str) -> Result<Snapshot, ApiError> {
    let url = items_url(base);
    let response = Request::get(&url).send().await?;
    let body = expect_success("GET", &url, response)?.text().await?;
    Ok(Snapshot::from_json(&body)?)
}

pub async fn create_item(base: &str, key: &str, value: &str) -> Result<(), ApiError> {
    let url = items_url(base);
    let response = Request::post(&url)
        .json(&CreateItemBody { key, value })?
        .send()
        .await?;
    expect_success("POST", &url, response)?;
    Ok(())
}

pub async fn update_item(base: &str, key: &str, value: &str) -> Result<(), ApiError> {
    let url = item_url(base, key);
    let response = Request::put(&url)
        .json(&UpdateItemBody { value })?
        .send()
        .await?;
    expect_success("PUT", &url, response)?;
    Ok(())
}

pub async fn delete_item(base: &str, key: &str) -> Result<(), ApiError> {
    let url = item_url(base, key);
    let response = Request::delete(&url).send().await?;
    expect_success("DELETE", &url, response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url_same_origin() {
        assert_eq!(items_url(""), "/items");
        assert_eq!(items_url("http://localhost:8000"), "http://localhost:8000/items");
    }

    #[test]
    fn test_item_url_plain_key() {
        assert_eq!(item_url("", "alpha-1_b.c"), "/items/alpha-1_b.c");
    }

    #[test]
    fn test_item_url_encodes_like_encode_uri_component() {
        assert_eq!(item_url("", "a/b c"), "/items/a%2Fb%20c");
        assert_eq!(item_url("", "q?x=1&y#z"), "/items/q%3Fx%3D1%26y%23z");
        assert_eq!(item_url("", "it's(ok)!*~"), "/items/it's(ok)!*~");
    }

    #[test]
    fn test_item_url_encodes_utf8() {
        assert_eq!(item_url("", "ключ"), "/items/%D0%BA%D0%BB%D1%8E%D1%87");
        assert_eq!(item_url("", "标签"), "/items/%E6%A0%87%E7%AD%BE");
    }
}
