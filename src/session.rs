//! The record manager: one explicit state object holding the store, the
//! draft bound to the form, and the error map from the last submit.

use tracing::{debug, info, warn};

use crate::model::{Country, Draft, ErrorMap, Field, FieldInput, Record, RecordId, RecordView};
use crate::store::{RecordStore, StoreError, Submitted};

/// Errors returned by [`Session`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The draft is missing required fields; nothing was committed.
    #[error("incomplete submission: {0}")]
    Incomplete(ErrorMap),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// All mutable state of one editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: RecordStore,
    draft: Draft,
    errors: ErrorMap,
    default_country: Option<Country>,
}

impl Session {
    /// Creates an empty session with a blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session whose drafts start with `country` selected.
    pub fn with_default_country(country: Option<Country>) -> Self {
        Self {
            draft: Draft::with_country(country),
            default_country: country,
            ..Self::default()
        }
    }

    /// Merges one field of raw input into the draft.
    pub fn set_field(&mut self, field: Field, input: FieldInput) {
        debug!(field = field.as_str(), "field changed");
        self.draft.set_field(field, input);
    }

    /// Validates the draft and commits it.
    ///
    /// On failure the error map is replaced and returned, and neither the
    /// store nor the draft changes. On success the error map is cleared and
    /// the draft is reset.
    pub fn submit(&mut self) -> Result<Submitted, SessionError> {
        let fields = match self.draft.to_fields() {
            Ok(fields) => fields,
            Err(errors) => {
                warn!(missing = %errors, "submission rejected");
                self.errors = errors.clone();
                return Err(SessionError::Incomplete(errors));
            }
        };
        self.errors = ErrorMap::new();
        let outcome = self.store.submit(fields)?;
        self.reset_draft();
        Ok(outcome)
    }

    /// Loads the record with `id` into the draft and enters edit mode.
    ///
    /// Any unsaved draft content and errors are discarded.
    pub fn start_edit(&mut self, id: RecordId) -> Result<(), SessionError> {
        let record = self.store.start_edit(id)?;
        self.draft = Draft::from(record);
        self.errors = ErrorMap::new();
        Ok(())
    }

    /// Leaves edit mode and resets the draft.
    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
        self.errors = ErrorMap::new();
        self.reset_draft();
    }

    /// Removes the record with `id`.
    ///
    /// The draft is kept even if it was loaded from the deleted record; its
    /// next submit appends a new record.
    pub fn delete(&mut self, id: RecordId) -> Result<Record, SessionError> {
        Ok(self.store.delete(id)?)
    }

    /// Returns a display projection of the record with `id`.
    pub fn view(&self, id: RecordId) -> Result<RecordView, SessionError> {
        Ok(self.store.view(id)?)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the error map from the last submit attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the id of the record under edit, if any.
    pub fn editing(&self) -> Option<RecordId> {
        self.store.editing()
    }

    fn reset_draft(&mut self) {
        self.draft = Draft::with_country(self.default_country);
        info!(records = self.store.len(), "draft reset");
    }
}
