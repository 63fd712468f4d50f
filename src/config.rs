//! Dashboard Configuration
//!
//! Built once in `main` and handed to the API client and image resolver.
//! Build-time overrides come from the environment Trunk runs in.

use log::LevelFilter;
use url::Url;

const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page origin {origin:?}: {source}")]
    Origin { origin: String, source: url::ParseError },
    #[error("invalid API base {base:?}: {source}")]
    ApiBase { base: String, source: url::ParseError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Absolute base URL of the REST service, always ending in `/`
    pub api_base: Url,
    pub log_level: LevelFilter,
}

impl DashboardConfig {
    /// Resolve configuration against the page origin using build-time settings
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        Self::resolve(
            origin,
            option_env!("DASHBOARD_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("DASHBOARD_LOG_LEVEL"),
        )
    }

    pub fn resolve(origin: &str, api_base: &str, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let origin_url = Url::parse(origin).map_err(|source| ConfigError::Origin {
            origin: origin.to_string(),
            source,
        })?;

        // Trailing slash so that joining relative endpoint paths appends
        let mut base = api_base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let api_base = origin_url.join(&base).map_err(|source| ConfigError::ApiBase {
            base: base.clone(),
            source,
        })?;

        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Ok(Self { api_base, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_base_joins_origin() {
        let config = DashboardConfig::resolve("http://localhost:3000", "/api", None).unwrap();
        assert_eq!(config.api_base.as_str(), "http://localhost:3000/api/");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_absolute_base_wins() {
        let config = DashboardConfig::resolve("http://localhost:3000", "http://localhost:3005/api/", Some("debug")).unwrap();
        assert_eq!(config.api_base.as_str(), "http://localhost:3005/api/");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = DashboardConfig::resolve("https://dash.example", "/api", Some("chatty")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_bad_origin() {
        let err = DashboardConfig::resolve("not a url", "/api", None).unwrap_err();
        assert!(matches!(err, ConfigError::Origin { .. }));
    }
}
