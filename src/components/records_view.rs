//! Records View
//!
//! Loads records for the committed filter through the query cache and
//! renders progress, error, empty state or the table. Registers a control
//! handle so the filter panel's shortcuts can drive it.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ErrorNotice, RecordEditor, RecordingBar, RecordsTable};
use crate::config::use_config;
use crate::context::use_dashboard;
use crate::models::{FetchState, RecordRow, RecordsKey, RecordsPayload};
use crate::query::RecordsQuery;
use crate::records::{latest_record, RecordsDisplay};
use crate::shortcuts::RecordsControl;
use crate::storage::read_cookie;

const EMPTY_MESSAGE: &str = "There is no data to display for these dates, try to change start and end dates.";
const NO_MATCH_MESSAGE: &str = "No records match the search text.";

fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Control surface of a mounted records view
#[derive(Clone, Copy)]
pub struct RecordsHandle {
    /// When the active record was started (None = not recording)
    pub recording_since: RwSignal<Option<NaiveDateTime>>,
    /// Record open in the editor
    pub editing: RwSignal<Option<RecordRow>>,
    visible_rows: Signal<Vec<RecordRow>>,
}

impl RecordsControl for RecordsHandle {
    fn toggle(&self, start: bool) {
        let recording = self.recording_since.get_untracked().is_some();
        if start && !recording {
            let now = Local::now().naive_local();
            log::info!("active record started at {}", now.format("%H:%M:%S"));
            self.recording_since.set(Some(now));
        } else if !start && recording {
            log::info!("active record stopped");
            self.recording_since.set(None);
        }
    }

    fn edit_latest(&self) {
        let rows = self.visible_rows.get_untracked();
        match latest_record(&rows) {
            Some(row) => self.editing.set(Some(row.clone())),
            None => log::info!("no record to edit"),
        }
    }
}

#[component]
pub fn RecordsView(
    #[prop(into)] start: Signal<NaiveDateTime>,
    #[prop(into)] end: Signal<NaiveDateTime>,
    #[prop(into)] search_text: Signal<String>,
) -> impl IntoView {
    let config = use_config();
    let dashboard = use_dashboard();
    let notice_duration = config.notice_duration;

    let query = StoredValue::new_local(RecordsQuery::new(config.fresh_for));
    let state = RwSignal::new(FetchState::Loading);
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    // Stale results refresh when the window regains focus
    let focus = window_event_listener(leptos::ev::focus, move |_| {
        set_refresh_tick.update(|t| *t += 1);
    });
    on_cleanup(move || focus.remove());

    Effect::new(move |_| {
        refresh_tick.track();
        let key = RecordsKey {
            start: start.get(),
            end: end.get(),
            auth_token: read_cookie(config.auth_cookie).unwrap_or_default(),
        };
        let now = now_millis();
        let Some((needs_fetch, current)) = query.try_update_value(|q| {
            let needs_fetch = q.activate(key.clone(), now);
            (needs_fetch, q.state().clone())
        }) else {
            return;
        };
        state.set(current);

        if needs_fetch {
            let config = config.clone();
            spawn_local(async move {
                let result = match commands::fetch_records(&config, &key).await {
                    Ok(RecordsPayload::Records(rows)) => {
                        log::debug!("loaded {} records", rows.len());
                        Ok(rows)
                    }
                    Ok(RecordsPayload::NoJson) => {
                        log::warn!("records response was not JSON");
                        Ok(Vec::new())
                    }
                    Err(e) => {
                        log::error!("failed to load records: {}", e);
                        Err(e.to_string())
                    }
                };
                let rendered = query
                    .try_update_value(|q| q.resolve(&key, result, now_millis()).then(|| q.state().clone()))
                    .flatten();
                if let Some(current) = rendered {
                    state.try_set(current);
                }
            });
        }
    });

    let display = Memo::new(move |_| RecordsDisplay::from_state(&state.get(), &search_text.get()));

    let handle = RecordsHandle {
        recording_since: RwSignal::new(None),
        editing: RwSignal::new(None),
        visible_rows: Signal::derive(move || match display.get() {
            RecordsDisplay::Table(rows) => rows,
            _ => Vec::new(),
        }),
    };
    dashboard.register_records(handle);
    on_cleanup(move || dashboard.withdraw_records());

    view! {
        <section class="records-view">
            <RecordingBar handle=handle />
            <RecordEditor handle=handle />
            {move || match display.get() {
                RecordsDisplay::Loading => view! {
                    <div class="progress-linear" role="progressbar">
                        <div class="progress-bar"></div>
                    </div>
                }.into_any(),
                RecordsDisplay::Error(message) => view! {
                    <ErrorNotice message=message duration=notice_duration />
                }.into_any(),
                RecordsDisplay::Empty => view! {
                    <div class="card empty-state">
                        <p class="card-title">{EMPTY_MESSAGE}</p>
                    </div>
                }.into_any(),
                RecordsDisplay::NoMatches => view! {
                    <div class="card empty-state">
                        <p class="card-title">{NO_MATCH_MESSAGE}</p>
                    </div>
                }.into_any(),
                RecordsDisplay::Table(rows) => view! {
                    <RecordsTable rows=rows editing=handle.editing />
                }.into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn row(id: i64, date: &str) -> RecordRow {
        RecordRow {
            id: RecordId::Number(id),
            date: date.into(),
            time_string: "1h".into(),
            note: format!("note {}", id),
        }
    }

    fn make_handle(rows: Vec<RecordRow>) -> RecordsHandle {
        let visible = RwSignal::new(rows);
        RecordsHandle {
            recording_since: RwSignal::new(None),
            editing: RwSignal::new(None),
            visible_rows: Signal::derive(move || visible.get()),
        }
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let owner = Owner::new();
        owner.set();
        let handle = make_handle(Vec::new());

        handle.toggle(false);
        assert_eq!(handle.recording_since.get_untracked(), None);

        handle.toggle(true);
        let started = handle.recording_since.get_untracked();
        assert!(started.is_some());

        handle.toggle(true);
        assert_eq!(handle.recording_since.get_untracked(), started);

        handle.toggle(false);
        assert_eq!(handle.recording_since.get_untracked(), None);
    }

    #[test]
    fn test_edit_latest_uses_visible_rows() {
        let owner = Owner::new();
        owner.set();
        let handle = make_handle(vec![row(1, "2024-01-03"), row(2, "2024-01-09"), row(3, "2024-01-05")]);

        handle.edit_latest();
        assert_eq!(handle.editing.get_untracked(), Some(row(2, "2024-01-09")));
    }

    #[test]
    fn test_edit_latest_without_rows_keeps_editor_closed() {
        let owner = Owner::new();
        owner.set();
        let handle = make_handle(Vec::new());

        handle.edit_latest();
        assert_eq!(handle.editing.get_untracked(), None);
    }
}
