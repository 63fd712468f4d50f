//! Task Details View
//!
//! The task and its instructions are fetched independently; either can
//! render without the other.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::delete_prompt;
use crate::components::{DeleteConfirmButton, InstructionCard, StatusBadge, TaskGraph};
use crate::context::{alert, spawn_scoped, use_app};
use crate::models::{Instruction, Task};
use crate::routes::Route;
use crate::time::format_timestamp;

#[component]
pub fn TaskDetailsPage(task_id: String) -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (task, set_task) = signal(None::<Task>);
    let (loading, set_loading) = signal(true);
    let (instructions, set_instructions) = signal(Vec::<Instruction>::new());
    let (instructions_loading, set_instructions_loading) = signal(true);

    {
        let api = api.clone();
        let task_id = task_id.clone();
        spawn_scoped(async move {
            match api.get_task(&task_id).await {
                Ok(loaded) => set_task.set(Some(loaded)),
                Err(e) => log::error!("[TaskDetails] {}", e),
            }
            set_loading.set(false);
        });
    }
    {
        let api = api.clone();
        let task_id = task_id.clone();
        spawn_scoped(async move {
            match api.list_instructions_for_task(&task_id).await {
                Ok(loaded) => {
                    log::info!("[TaskDetails] Loaded {} instructions for {}", loaded.len(), task_id);
                    set_instructions.set(loaded);
                }
                Err(e) => log::error!("[TaskDetails] {}", e),
            }
            set_instructions_loading.set(false);
        });
    }

    // Graph input: the task with its fetched instructions attached
    let graph_task = Signal::derive(move || {
        task.get().map(|t| Task { instructions: instructions.get(), ..t })
    });

    let run_api = api.clone();
    let run_id = task_id.clone();
    let on_run = move |_: leptos::ev::MouseEvent| {
        let api = run_api.clone();
        let task_id = run_id.clone();
        spawn_local(async move {
            match api.run_task(&task_id).await {
                Ok(()) => ctx.flash("Task run triggered (placeholder)."),
                Err(e) => alert(&format!("Failed to run task {}: {}", task_id, e)),
            }
        });
    };

    let delete_id = task_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let api = api.clone();
        let task_id = delete_id.clone();
        spawn_local(async move {
            match api.delete_task(&task_id).await {
                Ok(()) => ctx.navigate(Route::Tasks),
                Err(e) => {
                    log::error!("[TaskDetails] {}", e);
                    alert(&format!("Failed to delete task {}: {}", task_id, e));
                }
            }
        });
    });

    view! {
        <div class="details-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading Task Details..."</p> }
            >
                {
                    let task_id = task_id.clone();
                    let on_run = on_run.clone();
                    move || match task.get() {
                        None => view! { <p class="empty">"No task found with ID " {task_id.clone()}</p> }.into_any(),
                        Some(task) => view! {
                            <div class="details-header">
                                <h1>"Task Details - " {task.task_id.clone()}</h1>
                                <button class="run-btn" on:click=on_run.clone()>"Run This Task"</button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    prompt=delete_prompt(&task.task_id)
                                    on_confirm=on_delete
                                />
                            </div>
                            <div class="card">
                                <StatusBadge status=task.status.clone() />
                                <p><strong>"Name: "</strong>{task.task.clone().unwrap_or_else(|| "No title".to_string())}</p>
                                <p><strong>"Created: "</strong>{format_timestamp(task.created_at.as_deref(), "N/A")}</p>
                                <p><strong>"Start Time: "</strong>{format_timestamp(task.start_time.as_deref(), "N/A")}</p>
                            </div>
                        }.into_any(),
                    }
                }
            </Show>

            <h3 class="section-title">"Instructions for this Task"</h3>
            <Show
                when=move || !instructions_loading.get()
                fallback=|| view! { <p class="loading">"Loading instructions..."</p> }
            >
                <Show
                    when=move || !instructions.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No instructions found for this task."</p> }
                >
                    <For
                        each=move || instructions.get()
                        key=|instruction| instruction.instruction_id.clone()
                        children=|instruction| view! { <InstructionCard instruction=instruction /> }
                    />
                </Show>
            </Show>

            <Show when=move || task.with(Option::is_some)>
                <h3 class="section-title">"Task Graph"</h3>
                <TaskGraph task=graph_task />
            </Show>
        </div>
    }
}
