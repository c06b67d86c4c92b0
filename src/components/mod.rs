//! UI Components
//!
//! Leptos components for the dashboard.

mod filter_panel;
mod records_view;
mod records_table;
mod error_notice;
mod record_actions;

pub use filter_panel::FilterPanel;
pub use records_view::{RecordsHandle, RecordsView};
pub use records_table::RecordsTable;
pub use error_notice::ErrorNotice;
pub use record_actions::{RecordEditor, RecordingBar};
