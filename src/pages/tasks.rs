//! Tasks List View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::RecordList;
use crate::context::{alert, spawn_scoped, use_app};
use crate::models::Task;
use crate::routes::Route;
use crate::sorting::sort_by_recency;
use crate::store::remove_record;

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    let fetch_api = api.clone();
    spawn_scoped(async move {
        match fetch_api.list_tasks().await {
            Ok(loaded) => {
                log::info!("[Tasks] Loaded {} tasks", loaded.len());
                set_tasks.set(sort_by_recency(loaded));
            }
            Err(e) => log::error!("[Tasks] {}", e),
        }
        set_loading.set(false);
    });

    let on_delete = Callback::new(move |task_id: String| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_task(&task_id).await {
                Ok(()) => set_tasks.update(|tasks| remove_record(tasks, &task_id)),
                Err(e) => {
                    log::error!("[Tasks] {}", e);
                    alert(&format!("Failed to delete task {}: {}", task_id, e));
                }
            }
        });
    });

    view! {
        <div class="list-page">
            <h1>"All Tasks"</h1>
            <RecordList
                items=tasks
                loading=loading
                noun="tasks"
                on_view=Callback::new(move |task_id: String| ctx.navigate(Route::TaskDetails(task_id)))
                on_delete=on_delete
            />
        </div>
    }
}
