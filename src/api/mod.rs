//! REST API Client
//!
//! One async call per backend operation, organized by entity. Each call is
//! a single HTTP request: no retries, no timeouts, no caching.

mod action;
pub mod endpoints;
mod error;
mod instruction;
mod task;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::DashboardConfig;

pub use endpoints::Endpoint;
pub use error::ApiError;

/// Handle to the backend, cheap to clone
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_base.clone(),
        }
    }

    pub fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url, ApiError> {
        self.base.join(&endpoint.path()).map_err(|source| ApiError::Url {
            operation: endpoint.operation(),
            source,
        })
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(&endpoint)?;
        let operation = endpoint.operation();
        let id = endpoint.entity_id();
        log::debug!("[API] {} {}", endpoint.method(), url);

        let mut request = self.http.request(endpoint.method(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Request {
            operation,
            id: id.map(str::to_string),
            message: e.to_string(),
        })?;

        match ApiError::from_status(operation, id, response.status().as_u16()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let response = self.send::<()>(endpoint, None).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            operation: endpoint.operation(),
            id: endpoint.entity_id().map(str::to_string),
            message: e.to_string(),
        })
    }

    async fn delete(&self, endpoint: Endpoint<'_>) -> Result<(), ApiError> {
        self.send::<()>(endpoint, None).await?;
        log::info!("[API] {} {} done", endpoint.operation(), endpoint.entity_id().unwrap_or_default());
        Ok(())
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<(), ApiError> {
        self.send(endpoint, Some(body)).await?;
        Ok(())
    }
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = DashboardConfig::resolve("http://localhost:3000", "/api", None).unwrap();
        ApiClient::new(&config)
    }

    #[test]
    fn test_urls_stay_under_api_base() {
        let api = client();
        assert_eq!(
            api.url(&Endpoint::GetTask("t-1")).unwrap().as_str(),
            "http://localhost:3000/api/task/t-1"
        );
        assert_eq!(
            api.url(&Endpoint::ActionsForInstruction("i 2")).unwrap().as_str(),
            "http://localhost:3000/api/instructions/i%202/actions"
        );
    }
}
