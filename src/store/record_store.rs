use chrono::Utc;
use tracing::{debug, info, warn};

use super::error::StoreError;
use crate::model::{Record, RecordFields, RecordId, RecordView};

/// Outcome of a successful [`RecordStore::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new record was appended.
    Added(RecordId),
    /// The record under edit was overwritten in place.
    Updated(RecordId),
}

impl Submitted {
    /// Returns the id of the record that was written.
    pub fn id(self) -> RecordId {
        match self {
            Self::Added(id) | Self::Updated(id) => id,
        }
    }
}

/// Ordered, in-memory sequence of committed records plus the edit pointer.
///
/// The store is either idle or editing exactly one record. Submitting while
/// idle appends; submitting while editing overwrites the target and returns
/// to idle.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
    editing: Option<RecordId>,
}

impl RecordStore {
    /// Creates an empty, idle store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits validated fields: overwrites the record under edit, or
    /// appends a new one when idle.
    ///
    /// An overwrite keeps the record's id and creation time.
    pub fn submit(&mut self, fields: RecordFields) -> Result<Submitted, StoreError> {
        match self.editing {
            Some(id) => {
                let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
                    warn!(%id, "edit target missing on submit");
                    return Err(StoreError::UnknownRecord(id));
                };
                record.fields = fields;
                self.editing = None;
                info!(%id, "record updated");
                Ok(Submitted::Updated(id))
            }
            None => {
                let id = self.allocate_id();
                self.records.push(Record {
                    id,
                    created_at: Utc::now(),
                    fields,
                });
                info!(%id, total = self.records.len(), "record added");
                Ok(Submitted::Added(id))
            }
        }
    }

    /// Points the edit pointer at `id` and returns the record so the caller
    /// can load it into a draft.
    ///
    /// Replaces any edit already in progress. An unknown id leaves the store
    /// untouched.
    pub fn start_edit(&mut self, id: RecordId) -> Result<&Record, StoreError> {
        let index = self.index_of(id)?;
        if let Some(previous) = self.editing.replace(id) {
            debug!(%previous, "edit replaced");
        }
        debug!(%id, "edit started");
        Ok(&self.records[index])
    }

    /// Leaves edit mode without changing any record.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(%id, "edit cancelled");
        }
    }

    /// Removes the record with `id`; later records move up one position.
    ///
    /// Deleting the record under edit also ends edit mode. Deleting any other
    /// record leaves the edit pointer on its target.
    pub fn delete(&mut self, id: RecordId) -> Result<Record, StoreError> {
        let index = self.index_of(id)?;
        let removed = self.records.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
            info!(%id, "record under edit deleted, edit mode ended");
        }
        info!(%id, total = self.records.len(), "record deleted");
        Ok(removed)
    }

    /// Returns a display projection of the record with `id`.
    pub fn view(&self, id: RecordId) -> Result<RecordView, StoreError> {
        self.get(id)
            .map(Record::view)
            .ok_or(StoreError::UnknownRecord(id))
    }

    /// Returns the record with `id`, if present.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current position of `id` in the sequence.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Returns the id of the record currently at `index`.
    pub fn id_at(&self, index: usize) -> Option<RecordId> {
        self.records.get(index).map(|r| r.id)
    }

    /// Returns the id of the record under edit, if any.
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    fn index_of(&self, id: RecordId) -> Result<usize, StoreError> {
        self.position(id).ok_or_else(|| {
            warn!(%id, "unknown record");
            StoreError::UnknownRecord(id)
        })
    }

    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(self.next_id)
    }
}
