//! Time Records Dashboard App
//!
//! Filter panel above the records view, sharing the committed filter store.

use chrono::Local;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterPanel, RecordsView};
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::filter::load_filter;
use crate::storage::open_storage;
use crate::store::FilterStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let storage = StoredValue::new_local(open_storage());
    let today = Local::now().date_naive();
    let initial = storage.with_value(|s| load_filter(s.as_ref(), today));
    log::info!("filter {} .. {} search {:?}", initial.start, initial.end, initial.search_text);

    let store = Store::new(initial);

    // Provide context to all children
    provide_context(DashboardConfig::default());
    provide_context(store);
    provide_context(DashboardContext::new());

    let start = Signal::derive(move || store.start().get());
    let end = Signal::derive(move || store.end().get());
    let search_text = Signal::derive(move || store.search_text().get().trim().to_string());

    view! {
        <div class="dashboard">
            <div class="dashboard-paper">
                <FilterPanel storage=storage />
                <RecordsView start=start end=end search_text=search_text />
            </div>
        </div>
    }
}
