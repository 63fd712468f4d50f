//! Image Resolver
//!
//! Backend image references are absolute paths on the backend host. They
//! are served through the backend's `image-path` proxy endpoint, so the
//! browser never needs storage credentials.

use leptos::prelude::*;
use url::Url;

use crate::api::Endpoint;
use crate::config::DashboardConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageResolver {
    base: Url,
}

impl ImageResolver {
    pub fn new(config: &DashboardConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    /// Browser-loadable URL for a backend path; empty for a missing path
    pub fn resolve(&self, path: Option<&str>) -> String {
        let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
            return String::new();
        };
        match self.base.join(&Endpoint::ImagePath(path).path()) {
            Ok(url) => url.into(),
            Err(e) => {
                log::warn!("[Images] Cannot resolve {}: {}", path, e);
                String::new()
            }
        }
    }
}

/// Get the image resolver from context
pub fn use_images() -> ImageResolver {
    expect_context::<ImageResolver>()
}
