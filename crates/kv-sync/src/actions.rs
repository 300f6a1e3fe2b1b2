//! Form and Row Actions
//!
//! The request half of user actions, written against [`ItemsApi`] so the
//! browser client and tests can supply their own transport.

use crate::form::{FormState, Submission};
use crate::item::Snapshot;

/// Remote side of the items API
// Only driven from a single-threaded executor, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait ItemsApi {
    type Error: std::fmt::Display;

    async fn list_items(&self) -> Result<Snapshot, Self::Error>;
    async fn create_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
    async fn update_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
    async fn delete_item(&self, key: &str) -> Result<(), Self::Error>;
}

/// Send whatever the form plans to submit.
///
/// Returns `None` without touching the network when the form has nothing
/// to send. Feed the result to [`FormState::finish_submit`].
pub async fn send_submission<A: ItemsApi>(
    api: &A,
    form: &FormState,
) -> Option<(Submission, Result<(), A::Error>)> {
    let submission = form.plan_submit()?;
    let result = match &submission {
        Submission::Create { key, value } => api.create_item(key, value).await,
        Submission::Update { key, value } => api.update_item(key, value).await,
    };
    Some((submission, result))
}

/// Issue the delete for a rendered row's key.
///
/// Feed the result to [`crate::rows::RowSet::finish_delete`].
pub async fn send_delete<A: ItemsApi>(api: &A, key: String) -> (String, Result<(), A::Error>) {
    let result = api.delete_item(&key).await;
    (key, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ChangeNotification;
    use crate::rows::RowSet;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Create(String, String),
        Update(String, String),
        Delete(String),
    }

    /// Records calls; answers every write with `fail` if set.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        fail: Option<&'static str>,
    }

    impl FakeApi {
        fn failing(reason: &'static str) -> Self {
            Self { fail: Some(reason), ..Default::default() }
        }

        fn answer(&self, call: Call) -> Result<(), String> {
            self.calls.borrow_mut().push(call);
            match self.fail {
                Some(reason) => Err(reason.to_string()),
                None => Ok(()),
            }
        }
    }

    impl ItemsApi for FakeApi {
        type Error = String;

        async fn list_items(&self) -> Result<Snapshot, String> {
            self.calls.borrow_mut().push(Call::List);
            Ok(Snapshot::default())
        }

        async fn create_item(&self, key: &str, value: &str) -> Result<(), String> {
            self.answer(Call::Create(key.into(), value.into()))
        }

        async fn update_item(&self, key: &str, value: &str) -> Result<(), String> {
            self.answer(Call::Update(key.into(), value.into()))
        }

        async fn delete_item(&self, key: &str) -> Result<(), String> {
            self.answer(Call::Delete(key.into()))
        }
    }

    fn rows_with(pairs: &[(&str, &str)]) -> RowSet {
        let mut rows = RowSet::new();
        for (k, v) in pairs {
            rows.upsert(*k, *v);
        }
        rows
    }

    fn contents(rows: &RowSet) -> Vec<(String, String)> {
        rows.ids()
            .into_iter()
            .filter_map(|id| rows.get(id))
            .map(|r| (r.key.clone(), r.value.clone()))
            .collect()
    }

    #[test]
    fn test_blank_key_sends_nothing() {
        let api = FakeApi::default();
        let mut form = FormState::new();
        form.set_key("   ");
        form.set_value("v");
        let before = form.clone();

        assert!(block_on(send_submission(&api, &form)).is_none());
        assert!(api.calls.borrow().is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn test_edit_with_same_key_sends_update() {
        let api = FakeApi::default();
        let mut form = FormState::new();
        form.begin_edit("k1", "old");
        form.set_value("new");

        let (_, result) = block_on(send_submission(&api, &form)).unwrap();
        form.finish_submit(result).unwrap();

        assert_eq!(*api.calls.borrow(), vec![Call::Update("k1".into(), "new".into())]);
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_edit_with_changed_key_sends_create() {
        let api = FakeApi::default();
        let mut form = FormState::new();
        form.begin_edit("k1", "v");
        form.set_key("k2");

        block_on(send_submission(&api, &form)).unwrap();

        assert_eq!(*api.calls.borrow(), vec![Call::Create("k2".into(), "v".into())]);
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let api = FakeApi::failing("offline");
        let mut form = FormState::new();
        form.set_key("k");
        form.set_value("v");
        let before = form.clone();

        let (submission, result) = block_on(send_submission(&api, &form)).unwrap();
        let settled = form.finish_submit(result);

        assert_eq!(submission.key(), "k");
        assert_eq!(settled, Err("offline".to_string()));
        assert_eq!(form, before);
    }

    #[test]
    fn test_successful_delete_removes_row() {
        let api = FakeApi::default();
        let mut rows = rows_with(&[("a", "1"), ("b", "2")]);

        let (key, result) = block_on(send_delete(&api, "a".to_string()));
        rows.finish_delete(&key, result).unwrap();

        assert_eq!(*api.calls.borrow(), vec![Call::Delete("a".into())]);
        assert_eq!(contents(&rows), vec![("b".to_string(), "2".to_string())]);

        // The server's own notification for the same delete changes nothing
        rows.apply(&ChangeNotification::Deleted { key: "a".into() });
        assert_eq!(contents(&rows), vec![("b".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_failed_delete_keeps_row() {
        let api = FakeApi::failing("status 500");
        let mut rows = rows_with(&[("a", "1")]);

        let (key, result) = block_on(send_delete(&api, "a".to_string()));
        assert!(rows.finish_delete(&key, result).is_err());

        assert_eq!(contents(&rows), vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_list_items_through_api() {
        let api = FakeApi::default();
        let mut rows = rows_with(&[("stale", "1")]);

        rows.replace_all(block_on(api.list_items()).unwrap());

        assert!(rows.is_empty());
        assert_eq!(*api.calls.borrow(), vec![Call::List]);
    }
}
