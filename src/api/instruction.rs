//! Instruction Calls

use super::{ApiClient, ApiError, Endpoint};
use crate::models::{Action, Instruction, Validation};

impl ApiClient {
    pub async fn list_instructions(&self) -> Result<Vec<Instruction>, ApiError> {
        self.get_json(Endpoint::ListInstructions).await
    }

    pub async fn get_instruction(&self, instruction_id: &str) -> Result<Instruction, ApiError> {
        self.get_json(Endpoint::GetInstruction(instruction_id)).await
    }

    pub async fn list_actions_for_instruction(&self, instruction_id: &str) -> Result<Vec<Action>, ApiError> {
        self.get_json(Endpoint::ActionsForInstruction(instruction_id)).await
    }

    pub async fn delete_instruction(&self, instruction_id: &str) -> Result<(), ApiError> {
        self.delete(Endpoint::DeleteInstruction(instruction_id)).await
    }

    /// Store the validation and return it as accepted by the backend
    pub async fn update_instruction_validation(
        &self,
        instruction_id: &str,
        validation: &Validation,
    ) -> Result<Validation, ApiError> {
        self.post(Endpoint::InstructionValidation(instruction_id), validation).await?;
        log::info!("[API] Validation saved for instruction {}", instruction_id);
        Ok(validation.clone())
    }

    /// Placeholder: the backend has no run endpoint yet, so this only logs
    pub async fn run_instruction(&self, instruction_id: &str) -> Result<(), ApiError> {
        log::info!("[API] run instruction requested for {} (placeholder)", instruction_id);
        Ok(())
    }
}
