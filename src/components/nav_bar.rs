//! Navigation Bar
//!
//! Top-level links. Plain clicks are handled client-side; modified clicks
//! (new tab, new window) fall through to the browser.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::{Route, Section};

/// Anchor that navigates without a page load
#[component]
pub fn Link(
    route: Route,
    #[prop(optional)] class: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    let href = route.to_path();

    let on_click = move |ev: MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a href=href class=move || class.map(|c| c.get()).unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}

const SECTIONS: &[(Section, &str)] = &[
    (Section::Home, "Home"),
    (Section::Tasks, "Tasks"),
    (Section::Instructions, "Instructions"),
    (Section::Actions, "Actions"),
];

fn section_route(section: Section) -> Route {
    match section {
        Section::Home => Route::Home,
        Section::Tasks => Route::Tasks,
        Section::Instructions => Route::Instructions,
        Section::Actions => Route::Actions,
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();

    view! {
        <nav class="nav-bar">
            {SECTIONS.iter().map(|(section, label)| {
                let section = *section;
                let class = Signal::derive(move || {
                    if ctx.route.get().section() == Some(section) {
                        "nav-link active".to_string()
                    } else {
                        "nav-link".to_string()
                    }
                });
                view! {
                    <Link route=section_route(section) class=class>{*label}</Link>
                }
            }).collect_view()}
        </nav>
    }
}
