//! Change Stream
//!
//! Reads change notifications pushed by the server over `/ws`.

use futures::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use kv_sync::{decode_frame, ChangeNotification, FrameError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocketError {
    #[error("could not open socket {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Open socket to the server's change feed
pub struct ChangeStream {
    url: String,
    socket: WebSocket,
}

impl ChangeStream {
    pub fn connect(url: &str) -> Result<Self, SocketError> {
        let socket = WebSocket::open(url).map_err(|e| SocketError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        log::info!("socket opened: {}", url);
        Ok(Self { url: url.to_string(), socket })
    }

    /// Deliver notifications until the socket fails or closes.
    pub async fn run(mut self, mut on_change: impl FnMut(ChangeNotification)) {
        while let Some(message) = self.socket.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    dispatch_frame(&text, &mut on_change);
                }
                Ok(Message::Bytes(bytes)) => {
                    log::warn!("discarding binary frame ({} bytes)", bytes.len());
                }
                Err(e) => {
                    log::error!("socket {} failed: {}", self.url, e);
                    return;
                }
            }
        }
        log::info!("socket closed: {}", self.url);
    }
}

/// Decode one text frame and hand it on. Returns whether it was delivered.
fn dispatch_frame(text: &str, on_change: &mut impl FnMut(ChangeNotification)) -> bool {
    match decode_frame(text) {
        Ok(notification) => {
            on_change(notification);
            true
        }
        Err(FrameError::NotJson(_)) => {
            log::info!("ws (raw): {}", text);
            false
        }
        Err(e @ FrameError::Unrecognized(_)) => {
            log::warn!("discarding frame {:?}: {}", text, e);
            false
        }
    }
}
