//! REST Endpoints
//!
//! Paths are relative to the configured API base.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;

/// Same escaping as `encodeURIComponent`
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListTasks,
    GetTask(&'a str),
    DeleteTask(&'a str),
    InstructionsForTask(&'a str),
    ListInstructions,
    GetInstruction(&'a str),
    DeleteInstruction(&'a str),
    InstructionValidation(&'a str),
    ActionsForInstruction(&'a str),
    ListActions,
    GetAction(&'a str),
    DeleteAction(&'a str),
    ActionValidation(&'a str),
    ImagePath(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::DeleteTask(_) | Endpoint::DeleteInstruction(_) | Endpoint::DeleteAction(_) => Method::DELETE,
            Endpoint::InstructionValidation(_) | Endpoint::ActionValidation(_) => Method::POST,
            _ => Method::GET,
        }
    }

    /// Relative path, without a leading slash
    pub fn path(&self) -> String {
        let enc = encode_component;
        match *self {
            Endpoint::ListTasks => "tasks".to_string(),
            // singular for the task record itself
            Endpoint::GetTask(id) | Endpoint::DeleteTask(id) => format!("task/{}", enc(id)),
            Endpoint::InstructionsForTask(id) => format!("tasks/{}/instructions", enc(id)),
            Endpoint::ListInstructions => "instructions".to_string(),
            Endpoint::GetInstruction(id) | Endpoint::DeleteInstruction(id) => format!("instructions/{}", enc(id)),
            Endpoint::InstructionValidation(id) => format!("instructions/{}/validation", enc(id)),
            Endpoint::ActionsForInstruction(id) => format!("instructions/{}/actions", enc(id)),
            Endpoint::ListActions => "actions".to_string(),
            Endpoint::GetAction(id) | Endpoint::DeleteAction(id) => format!("actions/{}", enc(id)),
            Endpoint::ActionValidation(id) => format!("actions/{}/validation", enc(id)),
            Endpoint::ImagePath(path) => format!("image-path/{}", enc(path)),
        }
    }

    /// Operation name used in logs and errors
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::ListTasks => "list tasks",
            Endpoint::GetTask(_) => "get task",
            Endpoint::DeleteTask(_) => "delete task",
            Endpoint::InstructionsForTask(_) => "list instructions for task",
            Endpoint::ListInstructions => "list instructions",
            Endpoint::GetInstruction(_) => "get instruction",
            Endpoint::DeleteInstruction(_) => "delete instruction",
            Endpoint::InstructionValidation(_) => "update instruction validation",
            Endpoint::ActionsForInstruction(_) => "list actions for instruction",
            Endpoint::ListActions => "list actions",
            Endpoint::GetAction(_) => "get action",
            Endpoint::DeleteAction(_) => "delete action",
            Endpoint::ActionValidation(_) => "update action validation",
            Endpoint::ImagePath(_) => "resolve image",
        }
    }

    /// Entity ID the call is about, if any
    pub fn entity_id(&self) -> Option<&str> {
        match *self {
            Endpoint::ListTasks | Endpoint::ListInstructions | Endpoint::ListActions | Endpoint::ImagePath(_) => None,
            Endpoint::GetTask(id)
            | Endpoint::DeleteTask(id)
            | Endpoint::InstructionsForTask(id)
            | Endpoint::GetInstruction(id)
            | Endpoint::DeleteInstruction(id)
            | Endpoint::InstructionValidation(id)
            | Endpoint::ActionsForInstruction(id)
            | Endpoint::GetAction(id)
            | Endpoint::DeleteAction(id)
            | Endpoint::ActionValidation(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_backend_routes() {
        let cases = [
            (Endpoint::ListTasks, Method::GET, "tasks"),
            (Endpoint::GetTask("t1"), Method::GET, "task/t1"),
            (Endpoint::DeleteTask("t1"), Method::DELETE, "task/t1"),
            (Endpoint::InstructionsForTask("t1"), Method::GET, "tasks/t1/instructions"),
            (Endpoint::ListInstructions, Method::GET, "instructions"),
            (Endpoint::GetInstruction("i1"), Method::GET, "instructions/i1"),
            (Endpoint::DeleteInstruction("i1"), Method::DELETE, "instructions/i1"),
            (Endpoint::InstructionValidation("i1"), Method::POST, "instructions/i1/validation"),
            (Endpoint::ActionsForInstruction("i1"), Method::GET, "instructions/i1/actions"),
            (Endpoint::ListActions, Method::GET, "actions"),
            (Endpoint::GetAction("a1"), Method::GET, "actions/a1"),
            (Endpoint::DeleteAction("a1"), Method::DELETE, "actions/a1"),
            (Endpoint::ActionValidation("a1"), Method::POST, "actions/a1/validation"),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "{:?}", endpoint);
            assert_eq!(endpoint.path(), path, "{:?}", endpoint);
        }
    }

    #[test]
    fn test_image_path_is_fully_encoded() {
        let endpoint = Endpoint::ImagePath("/data/runs/a 1/shot.png");
        assert_eq!(endpoint.path(), "image-path/%2Fdata%2Fruns%2Fa%201%2Fshot.png");
        assert_eq!(endpoint.entity_id(), None);
    }

    #[test]
    fn test_ids_are_escaped() {
        assert_eq!(Endpoint::GetAction("a/b?c").path(), "actions/a%2Fb%3Fc");
        assert_eq!(Endpoint::GetAction("a/b?c").entity_id(), Some("a/b?c"));
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }
}
