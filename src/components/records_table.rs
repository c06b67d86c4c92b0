//! Records Table

use leptos::prelude::*;

use crate::models::RecordRow;

/// One row per record, in the order given
#[component]
pub fn RecordsTable(rows: Vec<RecordRow>, editing: RwSignal<Option<RecordRow>>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="records-table" aria-label="time records">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th class="align-right">"Hours"</th>
                        <th>"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        let id = row.id.clone();
                        let is_editing = move || editing.get().is_some_and(|e| e.id == id);
                        let row_for_click = row.clone();
                        view! {
                            <tr
                                class:editing=is_editing
                                on:dblclick=move |_| editing.set(Some(row_for_click.clone()))
                            >
                                <td>{row.date}</td>
                                <td class="align-right">{row.time_string}</td>
                                <td>{row.note}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
