//! Error Notice
//!
//! Snackbar that hides itself after a while or on dismiss.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[component]
pub fn ErrorNotice(message: String, duration: Duration) -> impl IntoView {
    let (open, set_open) = signal(true);

    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    let timer = StoredValue::new_local(Some(Timeout::new(millis, move || {
        let _ = set_open.try_set(false);
    })));
    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
    });

    move || {
        open.get().then(|| view! {
            <div class="snackbar" role="alert">
                <span class="snackbar-message">{message.clone()}</span>
                <button
                    type="button"
                    class="snackbar-close"
                    aria-label="dismiss"
                    on:click=move |_| set_open.set(false)
                >
                    "✕"
                </button>
            </div>
        })
    }
}
