//! Flash Banner
//!
//! Transient acknowledgement shown after user-triggered operations.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn FlashBanner() -> impl IntoView {
    let ctx = use_app();

    view! {
        {move || ctx.flash.get().map(|message| view! {
            <div class="flash-banner" role="status">
                <span>{message}</span>
                <button class="close-btn" on:click=move |_| ctx.dismiss_flash()>"×"</button>
            </div>
        })}
    }
}
