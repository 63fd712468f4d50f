//! Record List Component
//!
//! Shared body of the list views: loading and empty states, then one row
//! per record with view and delete controls.

use leptos::prelude::*;

use crate::components::delete_prompt;
use crate::components::{DeleteConfirmButton, StatusBadge};
use crate::models::Record;
use crate::time::format_timestamp;

/// Display fields of one list row
#[derive(Debug, Clone, PartialEq)]
struct RecordRow {
    id: String,
    summary: String,
    status: Option<String>,
    when: String,
}

impl RecordRow {
    fn from_record<T: Record>(record: &T) -> Self {
        Self {
            id: record.id().to_string(),
            summary: record.summary().unwrap_or("Untitled").to_string(),
            status: record.status().map(str::to_string),
            when: format_timestamp(record.recency(), "N/A"),
        }
    }
}

fn record_rows<T: Record>(records: &[T]) -> Vec<RecordRow> {
    records.iter().map(RecordRow::from_record).collect()
}

/// Shown in place of the list only when there is nothing to list
fn empty_message(noun: &str, len: usize) -> Option<String> {
    (len == 0).then(|| format!("No {} found.", noun))
}

#[component]
pub fn RecordList<T>(
    items: ReadSignal<Vec<T>>,
    loading: ReadSignal<bool>,
    /// Plural noun, e.g. "tasks"
    noun: &'static str,
    #[prop(into)] on_view: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let empty = move || items.with(|items| empty_message(noun, items.len()));

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <p class="loading">{format!("Loading {}...", noun)}</p> }
        >
            <Show
                when=move || empty().is_none()
                fallback=move || view! { <p class="empty">{empty()}</p> }
            >
                <ul class="record-list">
                    <For
                        each=move || items.with(|items| record_rows(items))
                        key=|row: &RecordRow| row.id.clone()
                        children=move |row: RecordRow| {
                            let view_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let prompt = delete_prompt(&row.id);

                            view! {
                                <li class="record-row">
                                    <span class="record-id">{row.id}</span>
                                    " - "
                                    <span class="record-summary">{row.summary}</span>
                                    <StatusBadge status=row.status />
                                    <span class="record-time">{row.when}</span>
                                    <button class="view-btn" on:click=move |_| on_view.run(view_id.clone())>
                                        "View details"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        prompt=prompt
                                        on_confirm=Callback::new(move |_: ()| on_delete.run(delete_id.clone()))
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn task(id: &str, title: Option<&str>) -> Task {
        serde_json::from_value(serde_json::json!({ "task_id": id, "task": title, "status": "completed" })).unwrap()
    }

    #[test]
    fn test_empty_collection_has_message_and_no_rows() {
        let tasks: Vec<Task> = Vec::new();
        assert!(record_rows(&tasks).is_empty());
        assert_eq!(empty_message("tasks", tasks.len()).as_deref(), Some("No tasks found."));
    }

    #[test]
    fn test_one_row_per_record_without_message() {
        let tasks = vec![task("t-1", Some("open settings")), task("t-2", None), task("t-3", Some("log in"))];
        let rows = record_rows(&tasks);

        assert_eq!(rows.len(), 3);
        assert_eq!(empty_message("tasks", tasks.len()), None);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["t-1", "t-2", "t-3"]);
        assert_eq!(rows[1].summary, "Untitled");
        assert_eq!(rows[0].status.as_deref(), Some("completed"));
        assert_eq!(rows[0].when, "N/A");
    }
}
