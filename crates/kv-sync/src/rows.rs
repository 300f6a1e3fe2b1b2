//! Row Set
//!
//! The rendered list as data: rows in display order plus a key index,
//! so a notification finds its row without scanning the list.

use std::collections::HashMap;

use crate::item::Snapshot;
use crate::notification::ChangeNotification;

/// Stable handle of a rendered row.
///
/// Ids are handed out in increasing order and never reused, so the view can
/// key its row components on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub key: String,
    pub value: String,
}

/// Outcome of [`RowSet::upsert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted(RowId),
    Updated(RowId),
}

/// Rows in display order with at most one row per key
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    rows: Vec<Row>,
    by_key: HashMap<String, RowId>,
    next_id: u64,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row and rebuild from a full snapshot, in snapshot order.
    ///
    /// Rows patched in before the snapshot are dropped with the rest.
    pub fn replace_all(&mut self, snapshot: Snapshot) {
        self.rows.clear();
        self.by_key.clear();
        for item in snapshot {
            self.upsert(item.key, item.value);
        }
        log::debug!("rows replaced from snapshot: {} rows", self.rows.len());
    }

    /// Replace the value of the row for `key` in place, or append a new row.
    pub fn upsert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Upsert {
        let key = key.into();
        let value = value.into();
        if let Some(&id) = self.by_key.get(&key) {
            if let Some(row) = self.row_mut(id) {
                row.value = value;
            }
            return Upsert::Updated(id);
        }

        let id = RowId(self.next_id);
        self.next_id += 1;
        self.by_key.insert(key.clone(), id);
        self.rows.push(Row { id, key, value });
        Upsert::Inserted(id)
    }

    /// Remove the row for `key`. A missing row is not an error.
    pub fn remove(&mut self, key: &str) -> Option<Row> {
        let id = self.by_key.remove(key)?;
        let pos = self.rows.iter().position(|r| r.id == id)?;
        Some(self.rows.remove(pos))
    }

    /// Settle a user-initiated delete: the row goes only if the server
    /// accepted the request.
    pub fn finish_delete<E>(&mut self, key: &str, result: Result<(), E>) -> Result<(), E> {
        result?;
        self.remove(key);
        Ok(())
    }

    /// Patch the rows with one pushed change.
    pub fn apply(&mut self, notification: &ChangeNotification) {
        match notification {
            ChangeNotification::Created { key, value } | ChangeNotification::Updated { key, value } => {
                match self.upsert(key.as_str(), value.as_str()) {
                    Upsert::Inserted(id) => log::debug!("row {:?} inserted for {:?}", id, key),
                    Upsert::Updated(id) => log::debug!("row {:?} updated for {:?}", id, key),
                }
            }
            ChangeNotification::Deleted { key } => {
                if self.remove(key).is_none() {
                    log::debug!("delete for {:?} ignored: no row", key);
                }
            }
        }
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Row ids in display order
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }
}
