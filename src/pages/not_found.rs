//! Fallback View

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code></p>
            <Link route=Route::Home>"Back to the dashboard"</Link>
        </div>
    }
}
