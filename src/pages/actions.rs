//! Actions List View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::RecordList;
use crate::context::{alert, spawn_scoped, use_app};
use crate::models::Action;
use crate::routes::Route;
use crate::sorting::sort_by_recency;
use crate::store::remove_record;

#[component]
pub fn ActionsPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app();

    let (actions, set_actions) = signal(Vec::<Action>::new());
    let (loading, set_loading) = signal(true);

    let fetch_api = api.clone();
    spawn_scoped(async move {
        match fetch_api.list_actions().await {
            Ok(loaded) => {
                log::info!("[Actions] Loaded {} actions", loaded.len());
                set_actions.set(sort_by_recency(loaded));
            }
            Err(e) => log::error!("[Actions] {}", e),
        }
        set_loading.set(false);
    });

    let on_delete = Callback::new(move |action_id: String| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_action(&action_id).await {
                Ok(()) => set_actions.update(|actions| remove_record(actions, &action_id)),
                Err(e) => {
                    log::error!("[Actions] {}", e);
                    alert(&format!("Failed to delete action {}: {}", action_id, e));
                }
            }
        });
    });

    view! {
        <div class="list-page">
            <h1>"All Actions"</h1>
            <RecordList
                items=actions
                loading=loading
                noun="actions"
                on_view=Callback::new(move |action_id: String| ctx.navigate(Route::ActionDetails(action_id)))
                on_delete=on_delete
            />
        </div>
    }
}
