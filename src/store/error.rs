use crate::model::RecordId;

/// Errors that can occur while operating on the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with this id is in the store, either because it was
    /// deleted or because it never existed.
    #[error("no record with id {0}")]
    UnknownRecord(RecordId),
}
