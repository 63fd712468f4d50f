//! Action Calls

use super::{ApiClient, ApiError, Endpoint};
use crate::models::{Action, Validation};

impl ApiClient {
    pub async fn list_actions(&self) -> Result<Vec<Action>, ApiError> {
        self.get_json(Endpoint::ListActions).await
    }

    pub async fn get_action(&self, action_id: &str) -> Result<Action, ApiError> {
        self.get_json(Endpoint::GetAction(action_id)).await
    }

    pub async fn delete_action(&self, action_id: &str) -> Result<(), ApiError> {
        self.delete(Endpoint::DeleteAction(action_id)).await
    }

    pub async fn update_action_validation(
        &self,
        action_id: &str,
        validation: &Validation,
    ) -> Result<Validation, ApiError> {
        self.post(Endpoint::ActionValidation(action_id), validation).await?;
        log::info!("[API] Validation saved for action {}", action_id);
        Ok(validation.clone())
    }

    /// Placeholder: the backend has no run endpoint yet, so this only logs
    pub async fn run_action(&self, action_id: &str) -> Result<(), ApiError> {
        log::info!("[API] run action requested for {} (placeholder)", action_id);
        Ok(())
    }
}
