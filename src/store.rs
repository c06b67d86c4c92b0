//! Filter State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity on the committed filter.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use reactive_stores::Store;

/// The filter currently handed to the records view
#[derive(Clone, Debug, PartialEq, Store)]
pub struct FilterState {
    /// First instant of the selected range (start of day)
    pub start: NaiveDateTime,
    /// Last instant of the selected range (end of day)
    pub end: NaiveDateTime,
    pub search_text: String,
}

/// Type alias for the store
pub type FilterStore = Store<FilterState>;

/// Get the filter store from context
pub fn use_filter_store() -> FilterStore {
    expect_context::<FilterStore>()
}
