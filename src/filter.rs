//! Filter Operations
//!
//! Loading, date normalization and validation for the filter panel.
//! Everything here is independent of the DOM.

use chrono::{
    Datelike, DateTime, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};

use crate::config::{END_DATE_KEY, SEARCH_TEXT_KEY, START_DATE_KEY};
use crate::error::ValidationError;
use crate::storage::{persist, KeyValueStore};
use crate::store::FilterState;

/// Day format used by the date inputs and the records endpoint
pub const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn storage_key(self) -> &'static str {
        match self {
            DateField::Start => START_DATE_KEY,
            DateField::End => END_DATE_KEY,
        }
    }

    /// Normalize a picked day to the bound this field represents
    pub fn normalize(self, day: NaiveDate) -> NaiveDateTime {
        match self {
            DateField::Start => start_of_day(day),
            DateField::End => end_of_day(day),
        }
    }
}

pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .map(|t| day.and_time(t))
        .unwrap_or_else(|| start_of_day(day))
}

/// First and last instant of the calendar month containing `today`
pub fn month_bounds(today: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (start_of_day(first), end_of_day(last))
}

/// Parse a persisted date.
/// Accepts RFC 3339 timestamps (converted to local time), naive ISO
/// timestamps and bare days.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, DAY_FORMAT).ok().map(start_of_day)
}

/// ISO-8601 in UTC with millisecond precision, as `Date.toISOString` writes it
pub fn to_iso_string(local: NaiveDateTime) -> String {
    let utc: DateTime<Utc> = match Local.from_local_datetime(&local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => local.and_utc(),
    };
    utc.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn format_day(dt: NaiveDateTime) -> String {
    dt.format(DAY_FORMAT).to_string()
}

/// Build the initial filter from storage, defaulting to the month of `today`
pub fn load_filter(store: &dyn KeyValueStore, today: NaiveDate) -> FilterState {
    let (month_start, month_end) = month_bounds(today);
    let stored = |key: &str| store.get(key).and_then(|raw| parse_stored_date(&raw));

    FilterState {
        start: stored(START_DATE_KEY).unwrap_or(month_start),
        end: stored(END_DATE_KEY).unwrap_or(month_end),
        search_text: store.get(SEARCH_TEXT_KEY).unwrap_or_default(),
    }
}

/// Apply a raw `yyyy-MM-dd` value from a date input.
/// Invalid input leaves the filter untouched and returns None.
pub fn apply_date_change(
    filter: &mut FilterState,
    field: DateField,
    raw: &str,
    store: &dyn KeyValueStore,
) -> Option<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).ok()?;
    let value = field.normalize(day);
    match field {
        DateField::Start => filter.start = value,
        DateField::End => filter.end = value,
    }
    persist(store, field.storage_key(), &to_iso_string(value));
    Some(value)
}

/// Check the form values; on success the visible search text is persisted
pub fn validate(values: &FilterState, store: &dyn KeyValueStore) -> Result<(), ValidationError> {
    if values.start > values.end {
        return Err(ValidationError::EndBeforeStart);
    }
    persist(store, SEARCH_TEXT_KEY, &values.search_text);
    Ok(())
}
