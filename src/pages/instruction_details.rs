//! Instruction Details View
//!
//! Instruction and its actions load independently. The detail block is
//! built once per load; validation saves update the entity in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::delete_prompt;
use crate::components::{
    ActionCard, DeleteConfirmButton, ImageGallery, InstructionGraph, JsonBlock, PromptBlock, StatusBadge,
    ValidationForm,
};
use crate::context::{alert, spawn_scoped, use_app};
use crate::gallery::{gallery_images, InstructionImage};
use crate::models::{Action, Instruction, Validation};
use crate::routes::Route;
use crate::store::apply_validation;
use crate::time::format_timestamp;

#[component]
pub fn InstructionDetailsPage(instruction_id: String) -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (instruction, set_instruction) = signal(None::<Instruction>);
    let (loading, set_loading) = signal(true);
    let (actions, set_actions) = signal(Vec::<Action>::new());
    let (actions_loading, set_actions_loading) = signal(true);

    {
        let api = api.clone();
        let instruction_id = instruction_id.clone();
        spawn_scoped(async move {
            match api.get_instruction(&instruction_id).await {
                Ok(loaded) => set_instruction.set(Some(loaded)),
                Err(e) => log::error!("[InstructionDetails] {}", e),
            }
            set_loading.set(false);
        });
    }
    {
        let api = api.clone();
        let instruction_id = instruction_id.clone();
        spawn_scoped(async move {
            match api.list_actions_for_instruction(&instruction_id).await {
                Ok(loaded) => {
                    log::info!("[InstructionDetails] Loaded {} actions for {}", loaded.len(), instruction_id);
                    set_actions.set(loaded);
                }
                Err(e) => log::error!("[InstructionDetails] {}", e),
            }
            set_actions_loading.set(false);
        });
    }

    let saved_validation = Signal::derive(move || instruction.with(|i| i.as_ref().and_then(|i| i.validation.clone())));

    let graph_instruction = Signal::derive(move || {
        instruction.get().map(|i| Instruction { actions: actions.get(), ..i })
    });

    let run_api = api.clone();
    let run_id = instruction_id.clone();
    let on_run = move |_: leptos::ev::MouseEvent| {
        let api = run_api.clone();
        let instruction_id = run_id.clone();
        spawn_local(async move {
            match api.run_instruction(&instruction_id).await {
                Ok(()) => ctx.flash("Instruction run triggered (placeholder)."),
                Err(e) => alert(&format!("Failed to run instruction {}: {}", instruction_id, e)),
            }
        });
    };

    let validate_api = api.clone();
    let validate_id = instruction_id.clone();
    let on_validate = Callback::new(move |validation: Validation| {
        let api = validate_api.clone();
        let instruction_id = validate_id.clone();
        spawn_local(async move {
            match api.update_instruction_validation(&instruction_id, &validation).await {
                Ok(saved) => {
                    set_instruction.update(|i| apply_validation(i, saved));
                    ctx.flash("Validation saved.");
                }
                Err(e) => {
                    log::error!("[InstructionDetails] {}", e);
                    alert(&format!("Failed to save validation: {}", e));
                }
            }
        });
    });

    let delete_id = instruction_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let api = api.clone();
        let instruction_id = delete_id.clone();
        spawn_local(async move {
            match api.delete_instruction(&instruction_id).await {
                Ok(()) => ctx.navigate(Route::Instructions),
                Err(e) => {
                    log::error!("[InstructionDetails] {}", e);
                    alert(&format!("Failed to delete instruction {}: {}", instruction_id, e));
                }
            }
        });
    });

    view! {
        <div class="details-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading Instruction..."</p> }
            >
                {
                    let instruction_id = instruction_id.clone();
                    let on_run = on_run.clone();
                    move || match instruction.get_untracked() {
                        None => view! {
                            <p class="empty">"No instruction found with ID " {instruction_id.clone()}</p>
                        }.into_any(),
                        Some(instruction) => {
                            let images = gallery_images(&instruction, &InstructionImage::ALL);
                            view! {
                                <div class="details-header">
                                    <h1>"Instruction Details"</h1>
                                    <button class="run-btn" on:click=on_run.clone()>"Run This Instruction"</button>
                                    <DeleteConfirmButton
                                    button_class="delete-btn"
                                    prompt=delete_prompt(&instruction.instruction_id)
                                    on_confirm=on_delete
                                />
                                </div>
                                <div class="card">
                                    <div class="card-header">
                                        <h2>{instruction.instruction_id.clone()}</h2>
                                        <StatusBadge status=instruction.status.clone() />
                                    </div>
                                    <div class="section">
                                        <h3 class="section-title">"Instruction"</h3>
                                        <p>{instruction.instruction.clone().unwrap_or_else(|| "N/A".to_string())}</p>
                                    </div>
                                    <PromptBlock prompt=instruction.prompt.clone() />
                                    <JsonBlock title="Generated Instruction" value=instruction.generated_instruction.clone() />
                                    <div class="section">
                                        <h3 class="section-title">"Timing"</h3>
                                        <p><strong>"Created: "</strong>{format_timestamp(instruction.created_at.as_deref(), "N/A")}</p>
                                        <p><strong>"Start Time: "</strong>{format_timestamp(instruction.start_time.as_deref(), "N/A")}</p>
                                        <p><strong>"End Time: "</strong>{format_timestamp(instruction.end_time.as_deref(), "N/A")}</p>
                                    </div>
                                    <div class="section">
                                        <h3 class="section-title">"Screenshot"</h3>
                                        <ImageGallery images=images />
                                    </div>
                                    <ValidationForm saved=saved_validation on_submit=on_validate />
                                </div>
                            }.into_any()
                        }
                    }
                }
            </Show>

            <h3 class="section-title">"Actions in this Instruction"</h3>
            <Show
                when=move || !actions_loading.get()
                fallback=|| view! { <p class="loading">"Loading actions..."</p> }
            >
                <Show
                    when=move || !actions.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No actions found for this instruction."</p> }
                >
                    <For
                        each=move || actions.get()
                        key=|action| action.action_id.clone()
                        children=|action| view! { <ActionCard action=action /> }
                    />
                </Show>
            </Show>

            <Show when=move || instruction.with(Option::is_some)>
                <h3 class="section-title">"Instruction Graph"</h3>
                <InstructionGraph instruction=graph_instruction />
            </Show>
        </div>
    }
}
