//! Dashboard Configuration
//!
//! Endpoint, storage keys and timing constants, provided via context.

use leptos::prelude::*;
use std::time::Duration;

/// Storage key for the persisted start date
pub const START_DATE_KEY: &str = "selectedStartDate";
/// Storage key for the persisted end date
pub const END_DATE_KEY: &str = "selectedEndDate";
/// Storage key for the persisted search text
pub const SEARCH_TEXT_KEY: &str = "searchText";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Path of the records endpoint, resolved against the page origin
    pub records_path: &'static str,
    pub auth_header: &'static str,
    pub auth_cookie: &'static str,
    /// Quiet period before search input is committed
    pub search_debounce: Duration,
    /// How long a fetched result is served without refetching
    pub fresh_for: Duration,
    /// Error notices hide themselves after this long
    pub notice_duration: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            records_path: "/app/timerecords",
            auth_header: "X-AUTH-TOKEN",
            auth_cookie: "authToken",
            search_debounce: Duration::from_millis(500),
            fresh_for: Duration::from_secs(10),
            notice_duration: Duration::from_secs(6),
        }
    }
}

/// Get the dashboard config from context, falling back to defaults
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}
