//! Frontend Models
//!
//! Data structures matching the records served by the automation backend.
//! Everything but the identifier is optional: the backend stores whatever
//! the agent pipeline produced.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Human correctness judgment attached to an instruction or action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub valid: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename = "validation_comments",
        alias = "comments"
    )]
    pub comments: String,
}

/// Top-level unit of automation work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    /// Embedded children, only present when the caller attached them
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<Instruction>,
}

/// A step belonging to a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub instruction_id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub generated_instruction: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub screenshot_path: Option<String>,
    #[serde(default)]
    pub validation: Option<Validation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
}

/// Atomic operation belonging to an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub action_id: String,
    #[serde(default)]
    pub instruction_id: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub screenshot_path: Option<String>,
    #[serde(default)]
    pub google_vision_plot: Option<String>,
    #[serde(default)]
    pub yolo_plot: Option<String>,
    #[serde(default)]
    pub yolo_icons_plot: Option<String>,
    #[serde(default)]
    pub annotated_plot: Option<String>,
    #[serde(default)]
    pub llm_output: Option<serde_json::Value>,
    #[serde(default)]
    pub validation: Option<Validation>,
}

/// Common surface used by list views and sorting.
pub trait Record {
    fn id(&self) -> &str;

    /// One human-readable line describing the record
    fn summary(&self) -> Option<&str>;

    fn status(&self) -> Option<&str>;

    /// Timestamp used for "most recent first" ordering
    fn recency(&self) -> Option<&str>;
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.task_id
    }

    fn summary(&self) -> Option<&str> {
        self.task.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn recency(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.start_time.as_deref())
    }
}

impl Record for Instruction {
    fn id(&self) -> &str {
        &self.instruction_id
    }

    fn summary(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn recency(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.start_time.as_deref())
    }
}

impl Record for Action {
    fn id(&self) -> &str {
        &self.action_id
    }

    fn summary(&self) -> Option<&str> {
        self.task.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn recency(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.start_time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tolerates_missing_fields() {
        let json = r#"{"_id": "65f0", "action_id": "a-1", "status": "completed", "yolo_plot": "/data/a-1/yolo.png"}"#;
        let action: Action = serde_json::from_str(json).unwrap();

        assert_eq!(action.action_id, "a-1");
        assert_eq!(action.status.as_deref(), Some("completed"));
        assert_eq!(action.yolo_plot.as_deref(), Some("/data/a-1/yolo.png"));
        assert!(action.screenshot_path.is_none());
        assert!(action.validation.is_none());
    }

    #[test]
    fn test_validation_reads_both_comment_names() {
        let wire: Validation = serde_json::from_str(r#"{"valid": true, "validation_comments": "ok"}"#).unwrap();
        let short: Validation = serde_json::from_str(r#"{"valid": true, "comments": "ok"}"#).unwrap();
        assert_eq!(wire, short);
        assert_eq!(wire.comments, "ok");
    }

    #[test]
    fn test_validation_writes_wire_name() {
        let v = Validation { valid: false, comments: "wrong button".to_string() };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"valid": false, "validation_comments": "wrong button"}));
    }

    #[test]
    fn test_instruction_embeds_actions() {
        let json = r#"{
            "instruction_id": "i-1",
            "task_id": "t-1",
            "generated_instruction": {"steps": ["open", "click"]},
            "actions": [{"action_id": "a-1"}, {"action_id": "a-2"}]
        }"#;
        let instruction: Instruction = serde_json::from_str(json).unwrap();
        assert_eq!(instruction.actions.len(), 2);
        assert_eq!(instruction.generated_instruction.unwrap()["steps"][1], "click");
    }

    #[test]
    fn test_null_children_and_validation_fields_decode() {
        let task: Task = serde_json::from_str(r#"{"task_id": "t-1", "instructions": null}"#).unwrap();
        assert!(task.instructions.is_empty());

        let instruction: Instruction =
            serde_json::from_str(r#"{"instruction_id": "i-1", "actions": null}"#).unwrap();
        assert!(instruction.actions.is_empty());

        let json = r#"[
            {"action_id": "a-1", "validation": {"valid": true, "validation_comments": "ok"}},
            {"action_id": "a-2", "validation": {"valid": null, "validation_comments": null}}
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(json).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].validation, Some(Validation::default()));
    }

    #[test]
    fn test_task_recency_prefers_created_at() {
        let task = Task {
            task_id: "t-1".to_string(),
            task: None,
            status: None,
            created_at: Some("2024-02-01T00:00:00Z".to_string()),
            start_time: Some("2024-01-01T00:00:00Z".to_string()),
            instructions: Vec::new(),
        };
        assert_eq!(task.recency(), Some("2024-02-01T00:00:00Z"));
    }
}
