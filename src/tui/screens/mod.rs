//! TUI screen implementations.

pub mod help;
pub mod record_form;
pub mod record_list;

pub use help::{HelpState, draw_help};
pub use record_form::{RecordFormState, draw_record_form};
pub use record_list::{RecordListState, draw_record_list};
