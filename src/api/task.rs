//! Task Calls

use super::{ApiClient, ApiError, Endpoint};
use crate::models::{Instruction, Task};

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json(Endpoint::ListTasks).await
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Task, ApiError> {
        self.get_json(Endpoint::GetTask(task_id)).await
    }

    pub async fn list_instructions_for_task(&self, task_id: &str) -> Result<Vec<Instruction>, ApiError> {
        self.get_json(Endpoint::InstructionsForTask(task_id)).await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        self.delete(Endpoint::DeleteTask(task_id)).await
    }

    /// Placeholder: the backend has no run endpoint yet, so this only logs
    pub async fn run_task(&self, task_id: &str) -> Result<(), ApiError> {
        log::info!("[API] run task requested for {} (placeholder)", task_id);
        Ok(())
    }
}
