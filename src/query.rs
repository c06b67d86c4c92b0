//! Records Query Cache
//!
//! Keyed cache with a freshness window and explicit eviction, plus the
//! fetch lifecycle the records view drives through it. Timestamps are
//! milliseconds supplied by the caller.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use crate::models::{FetchState, RecordRow, RecordsKey};

struct Entry<V> {
    value: V,
    fetched_at: u64,
}

pub enum Lookup<'a, V> {
    Fresh(&'a V),
    Stale(&'a V),
    Miss,
}

pub struct QueryCache<K, V> {
    fresh_for: u64,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> QueryCache<K, V> {
    pub fn new(fresh_for: Duration) -> Self {
        Self {
            fresh_for: u64::try_from(fresh_for.as_millis()).unwrap_or(u64::MAX),
            entries: HashMap::new(),
        }
    }

    pub fn lookup(&self, key: &K, now: u64) -> Lookup<'_, V> {
        match self.entries.get(key) {
            Some(entry) if now.saturating_sub(entry.fetched_at) < self.fresh_for => Lookup::Fresh(&entry.value),
            Some(entry) => Lookup::Stale(&entry.value),
            None => Lookup::Miss,
        }
    }

    pub fn insert(&mut self, key: K, value: V, now: u64) {
        self.entries.insert(key, Entry { value, fetched_at: now });
    }

    /// Remove every entry whose key matches; returns how many went
    pub fn remove_where(&mut self, mut matches: impl FnMut(&K) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !matches(key));
        before - self.entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Fetch lifecycle for the records view
pub struct RecordsQuery {
    cache: QueryCache<RecordsKey, Vec<RecordRow>>,
    in_flight: HashSet<RecordsKey>,
    active: Option<RecordsKey>,
    state: FetchState,
}

impl RecordsQuery {
    pub fn new(fresh_for: Duration) -> Self {
        Self {
            cache: QueryCache::new(fresh_for),
            in_flight: HashSet::new(),
            active: None,
            state: FetchState::Loading,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Make `key` the rendered query. Returns true when the caller must
    /// start a fetch for it.
    ///
    /// When the date range moved, entries for the previous start date are
    /// evicted first, along with fetches still in flight for it, so their
    /// results are discarded on arrival. Only the start date is compared, so
    /// entries sharing the previous start but differing in end date or token
    /// go too, and entries for older start dates stay.
    pub fn activate(&mut self, key: RecordsKey, now: u64) -> bool {
        if let Some(prev) = &self.active {
            if prev.start != key.start || prev.end != key.end {
                let prev_start = prev.start;
                let evicted = self.cache.remove_where(|k| k.start == prev_start);
                self.in_flight.retain(|k| k.start != prev_start);
                if evicted > 0 {
                    log::debug!("evicted {} cached result(s) starting {}", evicted, prev_start);
                }
            }
        }
        self.active = Some(key.clone());

        let (state, needs_fetch) = match self.cache.lookup(&key, now) {
            Lookup::Fresh(rows) => (FetchState::Success(rows.clone()), false),
            Lookup::Stale(rows) => (FetchState::Success(rows.clone()), true),
            Lookup::Miss => (FetchState::Loading, true),
        };
        self.state = state;
        needs_fetch && self.in_flight.insert(key)
    }

    /// Record a finished fetch. Results of fetches evicted while in flight
    /// are dropped. Otherwise successful rows are cached under their own
    /// key, and the state changes only if `key` is still active. Returns
    /// whether the rendered state changed.
    pub fn resolve(&mut self, key: &RecordsKey, result: Result<Vec<RecordRow>, String>, now: u64) -> bool {
        if !self.in_flight.remove(key) {
            log::debug!("dropping evicted result for {}..{}", key.start, key.end);
            return false;
        }
        if let Ok(rows) = &result {
            self.cache.insert(key.clone(), rows.clone(), now);
        }
        if self.active.as_ref() != Some(key) {
            log::debug!("dropping late result for {}..{}", key.start, key.end);
            return false;
        }
        self.state = match result {
            Ok(rows) => FetchState::Success(rows),
            Err(message) => FetchState::Error(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use chrono::{NaiveDate, NaiveDateTime};

    const FRESH: Duration = Duration::from_secs(10);

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn key(start: u32, end: u32) -> RecordsKey {
        RecordsKey {
            start: at(start),
            end: at(end),
            auth_token: "token".into(),
        }
    }

    fn rows(n: i64) -> Vec<RecordRow> {
        (0..n)
            .map(|i| RecordRow {
                id: RecordId::Number(i),
                date: "2024-01-01".into(),
                time_string: "1h".into(),
                note: format!("note {}", i),
            })
            .collect()
    }

    #[test]
    fn test_cache_freshness_window() {
        let mut cache = QueryCache::new(FRESH);
        cache.insert("a", 1, 1_000);
        assert!(matches!(cache.lookup(&"a", 10_999), Lookup::Fresh(&1)));
        assert!(matches!(cache.lookup(&"a", 11_000), Lookup::Stale(&1)));
        assert!(matches!(cache.lookup(&"b", 0), Lookup::Miss));
    }

    #[test]
    fn test_cache_remove_where() {
        let mut cache = QueryCache::new(FRESH);
        cache.insert((1, 2), "x", 0);
        cache.insert((1, 3), "y", 0);
        cache.insert((2, 3), "z", 0);
        assert_eq!(cache.remove_where(|k| k.0 == 1), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_activation_loads() {
        let mut query = RecordsQuery::new(FRESH);
        assert!(query.activate(key(1, 31), 0));
        assert_eq!(query.state(), &FetchState::Loading);

        assert!(query.resolve(&key(1, 31), Ok(rows(1)), 100));
        assert_eq!(query.state(), &FetchState::Success(rows(1)));
    }

    #[test]
    fn test_fresh_hit_skips_fetch_and_stale_hit_refreshes() {
        let mut query = RecordsQuery::new(FRESH);
        query.activate(key(1, 31), 0);
        query.resolve(&key(1, 31), Ok(rows(2)), 0);

        assert!(!query.activate(key(1, 31), 5_000));
        assert_eq!(query.state(), &FetchState::Success(rows(2)));

        assert!(query.activate(key(1, 31), 12_000));
        assert_eq!(query.state(), &FetchState::Success(rows(2)));
    }

    #[test]
    fn test_duplicate_activation_does_not_refetch_in_flight() {
        let mut query = RecordsQuery::new(FRESH);
        assert!(query.activate(key(1, 31), 0));
        assert!(!query.activate(key(1, 31), 10));
    }

    #[test]
    fn test_changing_start_evicts_previous_start() {
        let mut query = RecordsQuery::new(FRESH);
        query.activate(key(1, 31), 0);
        query.resolve(&key(1, 31), Ok(rows(1)), 0);

        assert!(query.activate(key(2, 31), 1_000));
        query.resolve(&key(2, 31), Ok(rows(3)), 1_000);

        // Back to the old range well inside its freshness window.
        assert!(query.activate(key(1, 31), 2_000));
        assert_eq!(query.state(), &FetchState::Loading);
    }

    #[test]
    fn test_end_only_change_evicts_by_start() {
        let mut query = RecordsQuery::new(FRESH);
        query.activate(key(1, 31), 0);
        query.resolve(&key(1, 31), Ok(rows(1)), 0);
        query.activate(key(5, 31), 0);
        query.resolve(&key(5, 31), Ok(rows(1)), 0);

        // Start stays 5, end moves: everything starting on the 5th goes,
        // the entry starting on the 1st was already evicted earlier.
        assert!(query.activate(key(5, 20), 100));
        assert!(query.activate(key(5, 31), 200));
    }

    #[test]
    fn test_error_never_shows_other_key_data() {
        let mut query = RecordsQuery::new(FRESH);
        query.activate(key(1, 31), 0);
        query.resolve(&key(1, 31), Ok(rows(4)), 0);

        query.activate(key(2, 28), 100);
        assert_eq!(query.state(), &FetchState::Loading);

        query.resolve(&key(2, 28), Err("network error".into()), 200);
        assert_eq!(query.state(), &FetchState::Error("network error".into()));
    }

    #[test]
    fn test_late_result_for_stale_key_is_not_rendered() {
        let mut query = RecordsQuery::new(FRESH);
        query.activate(key(1, 31), 0);
        query.activate(key(2, 31), 50);

        assert!(!query.resolve(&key(1, 31), Ok(rows(7)), 100));
        assert_eq!(query.state(), &FetchState::Loading);

        assert!(query.resolve(&key(2, 31), Ok(rows(1)), 150));
        assert_eq!(query.state(), &FetchState::Success(rows(1)));
    }

    #[test]
    fn test_result_evicted_in_flight_is_not_cached() {
        let mut query = RecordsQuery::new(FRESH);
        assert!(query.activate(key(1, 31), 0));
        // Moving the start evicts start=1 while its fetch is still running.
        assert!(query.activate(key(2, 31), 50));

        assert!(!query.resolve(&key(1, 31), Ok(rows(7)), 100));
        assert!(query.resolve(&key(2, 31), Ok(rows(1)), 120));

        assert!(query.activate(key(1, 31), 2_000));
        assert_eq!(query.state(), &FetchState::Loading);

        assert!(query.resolve(&key(1, 31), Ok(rows(2)), 2_100));
        assert_eq!(query.state(), &FetchState::Success(rows(2)));
    }
}
