//! Dashboard App
//!
//! Navigation shell: provides the shared handles and swaps the routed view.

use leptos::ev;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{FlashBanner, NavBar};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::images::ImageResolver;
use crate::pages::{
    ActionDetailsPage, ActionsPage, HomePage, InstructionDetailsPage, InstructionsPage, NotFoundPage,
    TaskDetailsPage, TasksPage,
};
use crate::routes::Route;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(ApiClient::new(&config));
    provide_context(ImageResolver::new(&config));

    let initial = window()
        .location()
        .pathname()
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home);
    let ctx = AppContext::new(signal(initial), signal(None));
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());

    view! {
        <NavBar />
        <FlashBanner />
        <main class="page">
            {move || match ctx.route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Tasks => view! { <TasksPage /> }.into_any(),
                Route::TaskDetails(task_id) => view! { <TaskDetailsPage task_id=task_id /> }.into_any(),
                Route::Instructions => view! { <InstructionsPage /> }.into_any(),
                Route::InstructionDetails(instruction_id) => {
                    view! { <InstructionDetailsPage instruction_id=instruction_id /> }.into_any()
                }
                Route::Actions => view! { <ActionsPage /> }.into_any(),
                Route::ActionDetails(action_id) => view! { <ActionDetailsPage action_id=action_id /> }.into_any(),
                Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </main>
    }
}
