//! Agent Run Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod gallery;
mod graph;
mod images;
mod logger;
mod models;
mod pages;
mod prompt;
mod routes;
mod sorting;
mod store;
mod time;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let origin = window().location().origin().unwrap_or_else(|_| "http://localhost".to_string());
    let config = match DashboardConfig::from_origin(&origin) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[Main] Bad configuration: {}", e).into());
            return;
        }
    };

    logger::init(config.log_level);
    log::info!("[Main] Using API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
