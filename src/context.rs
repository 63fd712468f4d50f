//! Application Context
//!
//! Shared navigation and notification state provided via Leptos Context
//! API, plus the view-scoped task spawner.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::routes::Route;

/// How long the acknowledgement banner stays up
const FLASH_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
    /// Transient acknowledgement banner - read
    pub flash: ReadSignal<Option<String>>,
    /// Transient acknowledgement banner - write
    set_flash: WriteSignal<Option<String>>,
    /// Bumped on every flash so an older timer does not clear a newer message
    flash_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        flash: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            flash: flash.0,
            set_flash: flash.1,
            flash_seq: RwSignal::new(0),
        }
    }

    /// Switch view and record it in browser history
    pub fn navigate(&self, route: Route) {
        let path = route.to_path();
        log::debug!("[Nav] -> {}", path);
        match window().history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    log::warn!("[Nav] pushState failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("[Nav] No history API: {:?}", e),
        }
        self.set_route.set(route);
    }

    /// Follow a history change made by the browser (back/forward)
    pub fn sync_from_location(&self) {
        match window().location().pathname() {
            Ok(path) => self.set_route.set(Route::parse(&path)),
            Err(e) => log::warn!("[Nav] Cannot read location: {:?}", e),
        }
    }

    /// Show a short-lived acknowledgement banner
    pub fn flash(&self, message: impl Into<String>) {
        let seq = self.flash_seq.get_untracked() + 1;
        self.flash_seq.set(seq);
        self.set_flash.set(Some(message.into()));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(FLASH_MS).await;
            if ctx.flash_seq.get_untracked() == seq {
                ctx.set_flash.set(None);
            }
        });
    }

    pub fn dismiss_flash(&self) {
        self.set_flash.set(None);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Spawn a fetch owned by the current view.
///
/// The future is aborted when the reactive owner is cleaned up, so a view
/// that is left before its requests finish never receives their results.
pub fn spawn_scoped<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    on_cleanup(move || handle.abort());
    spawn_local(async move {
        if Abortable::new(fut, registration).await.is_err() {
            log::debug!("[Task] Cancelled with its view");
        }
    });
}

/// Blocking browser alert, used to report failed writes
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::error!("[UI] {}", message);
    }
}
