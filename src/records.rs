//! Records Presentation
//!
//! Decides what the records view shows for a fetch state and search text.

use crate::models::{FetchState, RecordRow};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordsDisplay {
    Loading,
    Error(String),
    /// The backend returned nothing for the range
    Empty,
    /// Rows exist but none match the search text
    NoMatches,
    Table(Vec<RecordRow>),
}

impl RecordsDisplay {
    pub fn from_state(state: &FetchState, search_text: &str) -> Self {
        match state {
            FetchState::Loading => RecordsDisplay::Loading,
            FetchState::Error(message) => RecordsDisplay::Error(message.clone()),
            FetchState::Success(rows) if rows.is_empty() => RecordsDisplay::Empty,
            FetchState::Success(rows) => {
                let matching = filter_rows(rows, search_text);
                if matching.is_empty() {
                    RecordsDisplay::NoMatches
                } else {
                    RecordsDisplay::Table(matching)
                }
            }
        }
    }
}

/// Rows whose date, time or note contains `search_text`, in backend order
pub fn filter_rows(rows: &[RecordRow], search_text: &str) -> Vec<RecordRow> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            [&row.date, &row.time_string, &row.note]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Most recent record by date; among equal dates the later row wins
pub fn latest_record(rows: &[RecordRow]) -> Option<&RecordRow> {
    rows.iter().fold(None, |best: Option<&RecordRow>, row| match best {
        Some(b) if b.date > row.date => Some(b),
        _ => Some(row),
    })
}
