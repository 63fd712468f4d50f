//! Action Card Component
//!
//! Compact action preview with a thumbnail row of every populated image.

use leptos::prelude::*;

use crate::components::{Link, StatusBadge};
use crate::gallery::{gallery_images, ActionImage};
use crate::images::use_images;
use crate::models::Action;
use crate::routes::Route;

#[component]
pub fn ActionCard(
    action: Action,
    #[prop(default = true)] show_details_link: bool,
) -> impl IntoView {
    let resolver = use_images();
    let thumbnails: Vec<_> = gallery_images(&action, &ActionImage::ALL)
        .into_iter()
        .map(|image| (resolver.resolve(Some(&image.path)), image.label))
        .filter(|(src, _)| !src.is_empty())
        .collect();
    let action_id = action.action_id.clone();

    view! {
        <div class="card action-card">
            <h3>"Action: " {action.action_id.clone()}</h3>
            <StatusBadge status=action.status.clone() />
            <div class="image-row">
                {thumbnails.into_iter().map(|(src, label)| view! {
                    <img src=src alt=label class="thumbnail" />
                }).collect_view()}
            </div>
            {show_details_link.then(|| view! {
                <p>
                    <Link route=Route::ActionDetails(action_id)>"View Full Action Details"</Link>
                </p>
            })}
        </div>
    }
}
