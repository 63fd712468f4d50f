//! Home View

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Agent Run Dashboard"</h1>
            <p>"Inspect the tasks, instructions and actions recorded by the automation agent."</p>
            <ul class="home-links">
                <li><Link route=Route::Tasks>"Tasks"</Link>" - top-level runs"</li>
                <li><Link route=Route::Instructions>"Instructions"</Link>" - steps planned for each task"</li>
                <li><Link route=Route::Actions>"Actions"</Link>" - executed operations with screenshots and detections"</li>
            </ul>
        </div>
    }
}
