//! Frontend Models
//!
//! Data structures matching the records endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier; the backend sends either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// One time record (matches backend JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub id: RecordId,
    pub date: String,
    #[serde(default)]
    pub time_string: String,
    #[serde(default)]
    pub note: String,
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum RecordsPayload {
    Records(Vec<RecordRow>),
    /// The response did not declare a JSON content type
    NoJson,
}

/// Cache key for a records query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordsKey {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub auth_token: String,
}

/// Fetch lifecycle as seen by the records view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Success(Vec<RecordRow>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row() {
        let rows: Vec<RecordRow> = serde_json::from_str(
            r#"[{"id":1,"date":"2024-01-01","timeString":"2h","note":"x"},
                {"id":"a7","date":"2024-01-02","timeString":"30m","note":""}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, RecordId::Number(1));
        assert_eq!(rows[0].time_string, "2h");
        assert_eq!(rows[1].id.to_string(), "a7");
    }

    #[test]
    fn test_missing_optional_fields() {
        let row: RecordRow = serde_json::from_str(r#"{"id":3,"date":"2024-02-01"}"#).unwrap();
        assert_eq!(row.note, "");
        assert_eq!(row.time_string, "");
    }
}
