//! KV Sync
//!
//! Reconciliation core for a list view mirroring a remote key/value map.
//! A full snapshot seeds the rows once, pushed change notifications patch
//! them afterwards. Nothing here touches the browser.

pub mod actions;
pub mod form;
pub mod item;
pub mod notification;
pub mod rows;

pub use actions::{send_delete, send_submission, ItemsApi};
pub use form::{FormState, Submission};
pub use item::{CreateItemBody, Item, Snapshot, UpdateItemBody};
pub use notification::{decode_frame, ChangeNotification, FrameError};
pub use rows::{Row, RowId, RowSet, Upsert};
