//! Status Badge Component

use leptos::prelude::*;

fn badge_class(status: Option<&str>) -> &'static str {
    match status {
        Some("completed") => "status-badge completed",
        Some(_) => "status-badge pending",
        None => "status-badge unknown",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Option<String>) -> impl IntoView {
    let class = badge_class(status.as_deref());
    let label = status.unwrap_or_else(|| "N/A".to_string());

    view! { <span class=class>"Status: " {label}</span> }
}
