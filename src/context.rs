//! Dashboard Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::RecordsHandle;
use crate::shortcuts::RecordsControl;

/// Dashboard-wide signals provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Control handle of the mounted records view (None = not mounted)
    records: RwSignal<Option<RecordsHandle>>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(None),
        }
    }

    /// Called by the records view on mount
    pub fn register_records(&self, handle: RecordsHandle) {
        self.records.set(Some(handle));
    }

    /// Called by the records view on unmount
    pub fn withdraw_records(&self) {
        self.records.try_set(None);
    }

    /// Run `f` against the mounted records view, if any
    pub fn with_records<R>(&self, f: impl FnOnce(Option<&dyn RecordsControl>) -> R) -> R {
        let handle = self.records.try_get_untracked().flatten();
        f(handle.as_ref().map(|h| h as &dyn RecordsControl))
    }
}

pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
