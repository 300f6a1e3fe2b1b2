//! Item Form State
//!
//! Create/edit state machine behind the key/value form.

/// Request chosen by [`FormState::plan_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// `POST /items`
    Create { key: String, value: String },
    /// `PUT /items/{key}`
    Update { key: String, value: String },
}

impl Submission {
    pub fn key(&self) -> &str {
        match self {
            Submission::Create { key, .. } | Submission::Update { key, .. } => key,
        }
    }
}

/// Form fields plus the key bound in edit mode (`None` in create mode)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub key: String,
    pub value: String,
    editing_key: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a row into the form and switch to edit mode.
    pub fn begin_edit(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.value = value.into();
        self.editing_key = Some(key.clone());
        self.key = key;
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Decide what a submit should send, without changing the form.
    ///
    /// Returns `None` when the trimmed key is empty. Editing a row and then
    /// changing its key creates a new item under the new key; the old item
    /// is left alone.
    pub fn plan_submit(&self) -> Option<Submission> {
        let key = self.key.trim();
        if key.is_empty() {
            return None;
        }
        let key = key.to_string();
        let value = self.value.trim().to_string();

        match self.editing_key.as_deref() {
            Some(editing) if editing == key => Some(Submission::Update { key, value }),
            _ => Some(Submission::Create { key, value }),
        }
    }

    /// Clear both fields and go back to create mode.
    pub fn reset(&mut self) {
        self.key.clear();
        self.value.clear();
        self.editing_key = None;
    }

    /// Settle a submission: back to create mode only if the request
    /// succeeded, otherwise the fields stay as typed.
    pub fn finish_submit<E>(&mut self, result: Result<(), E>) -> Result<(), E> {
        result?;
        self.reset();
        Ok(())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_key.is_some() { "Save" } else { "Create" }
    }
}
