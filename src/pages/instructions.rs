//! Instructions List View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::RecordList;
use crate::context::{alert, spawn_scoped, use_app};
use crate::models::Instruction;
use crate::routes::Route;
use crate::sorting::sort_by_recency;
use crate::store::remove_record;

#[component]
pub fn InstructionsPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (instructions, set_instructions) = signal(Vec::<Instruction>::new());
    let (loading, set_loading) = signal(true);

    let fetch_api = api.clone();
    spawn_scoped(async move {
        match fetch_api.list_instructions().await {
            Ok(loaded) => {
                log::info!("[Instructions] Loaded {} instructions", loaded.len());
                set_instructions.set(sort_by_recency(loaded));
            }
            Err(e) => log::error!("[Instructions] {}", e),
        }
        set_loading.set(false);
    });

    let on_delete = Callback::new(move |instruction_id: String| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_instruction(&instruction_id).await {
                Ok(()) => set_instructions.update(|instructions| remove_record(instructions, &instruction_id)),
                Err(e) => {
                    log::error!("[Instructions] {}", e);
                    alert(&format!("Failed to delete instruction {}: {}", instruction_id, e));
                }
            }
        });
    });

    view! {
        <div class="list-page">
            <h1>"All Instructions"</h1>
            <RecordList
                items=instructions
                loading=loading
                noun="instructions"
                on_view=Callback::new(move |instruction_id: String| ctx.navigate(Route::InstructionDetails(instruction_id)))
                on_delete=on_delete
            />
        </div>
    }
}
