//! Active Record Controls
//!
//! Recording status bar and the editor panel opened by "edit latest".

use leptos::prelude::*;

use crate::components::RecordsHandle;
use crate::shortcuts::{RecordsControl, Shortcut};

#[component]
pub fn RecordingBar(handle: RecordsHandle) -> impl IntoView {
    view! {
        <div class="record-toolbar">
            {move || match handle.recording_since.get() {
                Some(since) => view! {
                    <div class="recording-bar" role="status">
                        <span class="recording-dot"></span>
                        <span>{format!("Recording since {}", since.format("%H:%M:%S"))}</span>
                        <button type="button" on:click=move |_| handle.toggle(false)>
                            "Stop"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <button type="button" title=Shortcut::StartRecord.chord() on:click=move |_| handle.toggle(true)>
                        "Start"
                    </button>
                }.into_any(),
            }}
            <button type="button" title=Shortcut::EditLatest.chord() on:click=move |_| handle.edit_latest()>
                "Edit latest"
            </button>
        </div>
    }
}

#[component]
pub fn RecordEditor(handle: RecordsHandle) -> impl IntoView {
    move || {
        handle.editing.get().map(|row| view! {
            <div class="card record-editor">
                <div class="record-editor-header">
                    <span>{format!("Record #{}", row.id)}</span>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="close editor"
                        on:click=move |_| handle.editing.set(None)
                    >
                        "✕"
                    </button>
                </div>
                <dl>
                    <dt>"Date"</dt>
                    <dd>{row.date}</dd>
                    <dt>"Hours"</dt>
                    <dd>{row.time_string}</dd>
                    <dt>"Note"</dt>
                    <dd>{row.note}</dd>
                </dl>
            </div>
        })
    }
}
