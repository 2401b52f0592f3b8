//! Actions returned by screen event handlers.

use crate::model::{Field, FieldInput, RecordId};

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the [`Session`](crate::session::Session) and
/// navigates between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Merge one field of input into the draft.
    SetField(Field, FieldInput),
    /// Validate and commit the draft.
    Submit,
    /// Leave edit mode, discarding the draft.
    CancelEdit,
    /// Show the record with the given id.
    ViewRecord(RecordId),
    /// Load the record with the given id into the form for editing.
    EditRecord(RecordId),
    /// Remove the record with the given id.
    DeleteRecord(RecordId),
    /// Quit the application.
    Quit,
}
