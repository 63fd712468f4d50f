//! Instruction Card Component
//!
//! Compact instruction preview with thumbnails from its first few actions.

use leptos::prelude::*;

use crate::components::{Link, StatusBadge};
use crate::gallery::first_image;
use crate::images::use_images;
use crate::models::Instruction;
use crate::routes::Route;

/// Actions sampled for the thumbnail row
const PREVIEW_ACTIONS: usize = 3;

#[component]
pub fn InstructionCard(
    instruction: Instruction,
    #[prop(default = true)] show_details_link: bool,
) -> impl IntoView {
    let resolver = use_images();
    let thumbnails: Vec<_> = instruction
        .actions
        .iter()
        .take(PREVIEW_ACTIONS)
        .filter_map(|action| {
            first_image(action).map(|path| (resolver.resolve(Some(path)), action.action_id.clone()))
        })
        .filter(|(src, _)| !src.is_empty())
        .collect();
    let instruction_id = instruction.instruction_id.clone();

    view! {
        <div class="card instruction-card">
            <h3>"Instruction: " {instruction.instruction_id.clone()}</h3>
            <p>{instruction.instruction.clone().unwrap_or_else(|| "N/A".to_string())}</p>
            <StatusBadge status=instruction.status.clone() />
            <div class="image-row">
                {thumbnails.into_iter().map(|(src, alt)| view! {
                    <img src=src alt=alt class="thumbnail" />
                }).collect_view()}
            </div>
            {show_details_link.then(|| view! {
                <p>
                    <Link route=Route::InstructionDetails(instruction_id)>"View Full Instruction Details"</Link>
                </p>
            })}
        </div>
    }
}
