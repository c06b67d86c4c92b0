//! Records Requests

use reqwest::header::CONTENT_TYPE;

use super::page_url;
use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::filter::format_day;
use crate::models::{RecordRow, RecordsKey, RecordsPayload};

/// `GET /app/timerecords?dateFrom=..&dateTo=..` for the given key
pub async fn fetch_records(config: &DashboardConfig, key: &RecordsKey) -> Result<RecordsPayload, FetchError> {
    let url = page_url(config.records_path)?;
    let from = format_day(key.start);
    let to = format_day(key.end);
    log::debug!("fetching records {}..{}", from, to);

    let response = reqwest::Client::new()
        .get(&url)
        .query(&[("dateFrom", from.as_str()), ("dateTo", to.as_str())])
        .header(CONTENT_TYPE, "application/json")
        .header(config.auth_header, key.auth_token.as_str())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response.text().await?;
    decode_records(content_type.as_deref(), &body)
}

/// Parse the body as records only when it is declared as JSON
pub fn decode_records(content_type: Option<&str>, body: &str) -> Result<RecordsPayload, FetchError> {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if !is_json {
        return Ok(RecordsPayload::NoJson);
    }
    let rows: Vec<RecordRow> = serde_json::from_str(body)?;
    Ok(RecordsPayload::Records(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_rows() {
        let payload = decode_records(
            Some("application/json; charset=utf-8"),
            r#"[{"id":1,"date":"2024-01-01","timeString":"2h","note":"x"}]"#,
        )
        .unwrap();
        let rows = match payload {
            RecordsPayload::Records(rows) => rows,
            other => panic!("expected records, got {:?}", other),
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-01-01");
        assert_eq!(rows[0].time_string, "2h");
        assert_eq!(rows[0].note, "x");
    }

    #[test]
    fn test_non_json_content_type_is_sentinel() {
        assert_eq!(decode_records(Some("text/html"), "<html></html>").unwrap(), RecordsPayload::NoJson);
        assert_eq!(decode_records(None, "[]").unwrap(), RecordsPayload::NoJson);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = decode_records(Some("application/json"), "{not json").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_empty_array() {
        let payload = decode_records(Some("application/json"), "[]").unwrap();
        assert_eq!(payload, RecordsPayload::Records(Vec::new()));
    }
}
