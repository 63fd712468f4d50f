//! View State Helpers
//!
//! Pure updates applied to view-local signals. Nothing here outlives the
//! view that owns it.

use crate::models::{Action, Instruction, Record, Validation};

/// Remove one record by ID, leaving the rest untouched and in order
pub fn remove_record<T: Record>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

/// Records that carry an editable validation sub-record
pub trait Validatable {
    fn validation(&self) -> Option<&Validation>;
    fn set_validation(&mut self, validation: Validation);
}

impl Validatable for Instruction {
    fn validation(&self) -> Option<&Validation> {
        self.validation.as_ref()
    }

    fn set_validation(&mut self, validation: Validation) {
        self.validation = Some(validation);
    }
}

impl Validatable for Action {
    fn validation(&self) -> Option<&Validation> {
        self.validation.as_ref()
    }

    fn set_validation(&mut self, validation: Validation) {
        self.validation = Some(validation);
    }
}

/// Merge an accepted validation into the loaded entity, if any
pub fn apply_validation<T: Validatable>(entity: &mut Option<T>, validation: Validation) {
    if let Some(entity) = entity.as_mut() {
        entity.set_validation(validation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_action(id: &str) -> Action {
        serde_json::from_value(serde_json::json!({ "action_id": id, "task": format!("ctx {}", id) })).unwrap()
    }

    #[test]
    fn test_remove_record_only_removes_target() {
        let mut actions = vec![make_action("a"), make_action("b"), make_action("c")];
        let before = actions.clone();

        remove_record(&mut actions, "b");

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], before[0]);
        assert_eq!(actions[1], before[2]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut actions = vec![make_action("a")];
        remove_record(&mut actions, "zzz");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_apply_validation_reflects_submission() {
        let mut loaded = Some(make_action("a"));
        let submitted = Validation { valid: true, comments: "ok".to_string() };

        apply_validation(&mut loaded, submitted.clone());

        assert_eq!(loaded.as_ref().and_then(|a| a.validation()), Some(&submitted));
    }

    #[test]
    fn test_apply_validation_overwrites_previous() {
        let mut action = make_action("a");
        action.validation = Some(Validation { valid: false, comments: "first".to_string() });
        let mut loaded = Some(action);

        apply_validation(&mut loaded, Validation { valid: true, comments: "second".to_string() });

        let v = loaded.unwrap().validation.unwrap();
        assert!(v.valid);
        assert_eq!(v.comments, "second");
    }

    #[test]
    fn test_apply_validation_without_entity() {
        let mut loaded: Option<Instruction> = None;
        apply_validation(&mut loaded, Validation::default());
        assert!(loaded.is_none());
    }
}
