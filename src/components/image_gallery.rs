//! Image Gallery Component
//!
//! Grid of thumbnails; each one expands into a fixed full-viewport
//! lightbox independently of the others.

use leptos::prelude::*;

use crate::gallery::{ExpandSet, GalleryImage};
use crate::images::use_images;

const THUMBNAIL_STYLE: &str = "width: 100%; max-width: 300px; cursor: pointer;";
const LIGHTBOX_STYLE: &str = "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
    width: auto; height: auto; max-width: 90vw; max-height: 80vh; object-fit: contain; \
    z-index: 1000; background-color: #fff; box-shadow: 0 0 20px rgba(0,0,0,0.3); cursor: zoom-out;";

#[component]
pub fn ImageGallery(images: Vec<GalleryImage>) -> impl IntoView {
    let resolver = use_images();
    let (expanded, set_expanded) = signal(ExpandSet::default());

    let blocks: Vec<_> = images
        .into_iter()
        .map(|image| (resolver.resolve(Some(&image.path)), image))
        .filter(|(src, _)| !src.is_empty())
        .collect();

    if blocks.is_empty() {
        return view! { <p class="empty">"No images available."</p> }.into_any();
    }

    view! {
        <div class="image-grid">
            {blocks.into_iter().map(|(src, image)| {
                let key = image.key;
                let is_expanded = move || expanded.with(|state| state.is_expanded(key));
                let toggle = move |_| set_expanded.update(|state| state.toggle(key));

                view! {
                    <div class="image-container">
                        <h4 class="image-title">{image.label}</h4>
                        <img
                            src=src.clone()
                            alt=image.label
                            class="gallery-image"
                            class:expanded=is_expanded
                            style=move || if is_expanded() { LIGHTBOX_STYLE } else { THUMBNAIL_STYLE }
                            on:click=toggle
                        />
                        <div class="image-controls">
                            <button class="control-btn" on:click=toggle>
                                {move || if is_expanded() { "Shrink" } else { "Expand" }}
                            </button>
                            <a href=src target="_blank" rel="noreferrer" class="link-btn">"Open in New Tab"</a>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}
