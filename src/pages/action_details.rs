//! Action Details View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::delete_prompt;
use crate::components::{DeleteConfirmButton, ImageGallery, JsonBlock, Link, PromptBlock, StatusBadge, ValidationForm};
use crate::context::{alert, spawn_scoped, use_app};
use crate::gallery::{gallery_images, ActionImage};
use crate::models::{Action, Validation};
use crate::routes::Route;
use crate::store::apply_validation;
use crate::time::format_timestamp;

#[component]
pub fn ActionDetailsPage(action_id: String) -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (action, set_action) = signal(None::<Action>);
    let (loading, set_loading) = signal(true);

    {
        let api = api.clone();
        let action_id = action_id.clone();
        spawn_scoped(async move {
            match api.get_action(&action_id).await {
                Ok(loaded) => set_action.set(Some(loaded)),
                Err(e) if e.is_not_found() => log::warn!("[ActionDetails] {}", e),
                Err(e) => log::error!("[ActionDetails] {}", e),
            }
            set_loading.set(false);
        });
    }

    let saved_validation = Signal::derive(move || action.with(|a| a.as_ref().and_then(|a| a.validation.clone())));

    let run_api = api.clone();
    let run_id = action_id.clone();
    let on_run = move |_: leptos::ev::MouseEvent| {
        let api = run_api.clone();
        let action_id = run_id.clone();
        spawn_local(async move {
            match api.run_action(&action_id).await {
                Ok(()) => ctx.flash("Action run triggered (placeholder)."),
                Err(e) => alert(&format!("Failed to run action {}: {}", action_id, e)),
            }
        });
    };

    let validate_api = api.clone();
    let validate_id = action_id.clone();
    let on_validate = Callback::new(move |validation: Validation| {
        let api = validate_api.clone();
        let action_id = validate_id.clone();
        spawn_local(async move {
            match api.update_action_validation(&action_id, &validation).await {
                Ok(saved) => {
                    set_action.update(|a| apply_validation(a, saved));
                    ctx.flash("Validation saved.");
                }
                Err(e) => {
                    log::error!("[ActionDetails] {}", e);
                    alert(&format!("Failed to save validation: {}", e));
                }
            }
        });
    });

    let delete_id = action_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let api = api.clone();
        let action_id = delete_id.clone();
        spawn_local(async move {
            match api.delete_action(&action_id).await {
                Ok(()) => ctx.navigate(Route::Actions),
                Err(e) => {
                    log::error!("[ActionDetails] {}", e);
                    alert(&format!("Failed to delete action {}: {}", action_id, e));
                }
            }
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="loading">"Loading Action..."</p> }
        >
            {
                let action_id = action_id.clone();
                let on_run = on_run.clone();
                move || match action.get_untracked() {
                    None => view! {
                        <p class="empty">"No action found with ID " {action_id.clone()}</p>
                    }.into_any(),
                    Some(action) => {
                        let images = gallery_images(&action, &ActionImage::ALL);
                        let parent = action.instruction_id.clone();
                        view! {
                            <div class="details-page">
                                <div class="details-header">
                                    <h1>"Action Details"</h1>
                                    <button class="run-btn" on:click=on_run.clone()>"Run This Action"</button>
                                    <DeleteConfirmButton
                                    button_class="delete-btn"
                                    prompt=delete_prompt(&action.action_id)
                                    on_confirm=on_delete
                                />
                                </div>
                                <div class="card">
                                    <div class="card-header">
                                        <h2>"Action ID: " {action.action_id.clone()}</h2>
                                        <StatusBadge status=action.status.clone() />
                                    </div>
                                    {parent.map(|instruction_id| view! {
                                        <p class="parent-link">
                                            "Instruction: "
                                            <Link route=Route::InstructionDetails(instruction_id.clone())>
                                                {instruction_id}
                                            </Link>
                                        </p>
                                    })}
                                    <div class="section">
                                        <h3 class="section-title">"Task"</h3>
                                        <p>{action.task.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                    </div>
                                    <PromptBlock prompt=action.prompt.clone() />
                                    <div class="section">
                                        <h3 class="section-title">"Timing"</h3>
                                        <p><strong>"Start Time: "</strong>{format_timestamp(action.start_time.as_deref(), "N/A")}</p>
                                        <p><strong>"End Time: "</strong>{format_timestamp(action.end_time.as_deref(), "In Progress")}</p>
                                    </div>
                                    <div class="section">
                                        <h3 class="section-title">"Analysis Results"</h3>
                                        <ImageGallery images=images />
                                    </div>
                                    <JsonBlock title="LLM Output" value=action.llm_output.clone() />
                                    <ValidationForm saved=saved_validation on_submit=on_validate />
                                </div>
                            </div>
                        }.into_any()
                    }
                }
            }
        </Show>
    }
}
