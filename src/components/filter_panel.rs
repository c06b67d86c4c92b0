//! Filter Panel
//!
//! Date range and search inputs. Dates commit immediately, search text
//! commits after a quiet period. Also owns the global keyboard shortcuts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_hotkeys::{use_document_keyup, KeyState};

use crate::config::use_config;
use crate::context::use_dashboard;
use crate::debounce::SearchDebounce;
use crate::filter::{apply_date_change, format_day, validate, DateField};
use crate::shortcuts::handle_key;
use crate::storage::KeyValueStore;
use crate::store::{use_filter_store, FilterState, FilterStateStoreFields};

#[component]
pub fn FilterPanel(storage: StoredValue<Box<dyn KeyValueStore>, LocalStorage>) -> impl IntoView {
    let config = use_config();
    let store = use_filter_store();
    let dashboard = use_dashboard();

    // What the search box shows; runs ahead of the committed value
    let (search_input, set_search_input) = signal(store.search_text().get_untracked());
    let (validation, set_validation) = signal(None::<String>);

    Effect::new(move |_| {
        let values = FilterState {
            start: store.start().get(),
            end: store.end().get(),
            search_text: search_input.get(),
        };
        let result = storage.with_value(|s| validate(&values, s.as_ref()));
        set_validation.set(result.err().map(|e| e.to_string()));
    });

    let on_date_change = move |field: DateField, raw: String| {
        let mut values = FilterState {
            start: store.start().get_untracked(),
            end: store.end().get_untracked(),
            search_text: store.search_text().get_untracked(),
        };
        match storage.with_value(|s| apply_date_change(&mut values, field, &raw, s.as_ref())) {
            Some(value) => match field {
                DateField::Start => store.start().set(value),
                DateField::End => store.end().set(value),
            },
            None => log::debug!("ignoring invalid {:?} date {:?}", field, raw),
        }
    };

    let debounce = StoredValue::new_local(SearchDebounce::new(config.search_debounce));
    on_cleanup(move || {
        debounce.try_update_value(|d| d.cancel());
    });

    let on_search_input = move |text: String| {
        set_search_input.set(text.clone());
        debounce.update_value(|d| {
            let ticket = d.schedule(text);
            let timer = Timeout::new(d.quiet_millis(), move || {
                let committed = debounce.try_update_value(|d| d.expire(ticket)).flatten();
                if let Some(text) = committed {
                    store.search_text().set(text);
                }
            });
            d.arm(timer);
        });
    };

    use_document_keyup(move |key: KeyState| {
        dashboard.with_records(|control| handle_key(&key, control));
    });

    view! {
        <section class="filter-panel">
            <div class="filter-field">
                <label for="date-picker-start">"Start Date"</label>
                <input
                    id="date-picker-start"
                    type="date"
                    aria-label="change start date"
                    prop:value=move || format_day(store.start().get())
                    on:change=move |ev| on_date_change(DateField::Start, event_target_value(&ev))
                />
            </div>
            <div class="filter-field">
                <label for="date-picker-end">"End Date"</label>
                <input
                    id="date-picker-end"
                    type="date"
                    aria-label="change end date"
                    class:invalid=move || validation.get().is_some()
                    prop:value=move || format_day(store.end().get())
                    on:change=move |ev| on_date_change(DateField::End, event_target_value(&ev))
                />
                {move || validation.get().map(|message| view! {
                    <span class="helper-text error">{message}</span>
                })}
            </div>
            <div class="filter-field search-field">
                <label for="searchText">"Search"</label>
                <div class="search-input">
                    <input
                        id="searchText"
                        name="searchText"
                        type="text"
                        autocomplete="off"
                        prop:value=move || search_input.get()
                        on:input=move |ev| on_search_input(event_target_value(&ev))
                    />
                    {move || (!search_input.get().is_empty()).then(|| view! {
                        <button
                            type="button"
                            class="icon-button"
                            aria-label="clear search"
                            on:mousedown=|ev| ev.prevent_default()
                            on:click=move |_| on_search_input(String::new())
                        >
                            "✕"
                        </button>
                    })}
                    <span class="icon-button disabled" aria-label="search">"⌕"</span>
                </div>
            </div>
        </section>
    }
}
