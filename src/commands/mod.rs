//! Backend Requests
//!
//! HTTP bindings to the time records backend, organized by resource.

mod records;

pub use records::*;

use crate::error::FetchError;

/// Resolve an absolute path against the page origin
fn page_url(path: &str) -> Result<String, FetchError> {
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .ok_or(FetchError::Location)?;
    Ok(format!("{}{}", origin, path))
}
