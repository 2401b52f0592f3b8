//! In-memory record sequence and edit pointer.
//!
//! The [`RecordStore`] is the only owner allowed to change the sequence.
//! Records are addressed by their stable [`RecordId`](crate::model::RecordId);
//! positional lookups exist only for rendering.

mod error;
mod record_store;

pub use error::StoreError;
pub use record_store::{RecordStore, Submitted};
