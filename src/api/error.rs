//! API Errors

/// Failure of a single backend call, tagged with what was being attempted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{operation}{}: request failed: {message}", id_suffix(.id))]
    Request {
        operation: &'static str,
        id: Option<String>,
        message: String,
    },
    #[error("{operation}: no record with ID {id}")]
    NotFound { operation: &'static str, id: String },
    #[error("{operation}{} failed with HTTP {status}", id_suffix(.id))]
    Status {
        operation: &'static str,
        id: Option<String>,
        status: u16,
    },
    #[error("{operation}{}: invalid response: {message}", id_suffix(.id))]
    Decode {
        operation: &'static str,
        id: Option<String>,
        message: String,
    },
    #[error("{operation}: cannot build URL: {source}")]
    Url {
        operation: &'static str,
        source: url::ParseError,
    },
}

fn id_suffix(id: &Option<String>) -> String {
    id.as_ref().map(|id| format!(" ({})", id)).unwrap_or_default()
}

impl ApiError {
    /// Map an HTTP status to an error; `None` for success codes
    pub fn from_status(operation: &'static str, id: Option<&str>, status: u16) -> Option<ApiError> {
        if (200..300).contains(&status) {
            return None;
        }
        Some(match (status, id) {
            (404, Some(id)) => ApiError::NotFound {
                operation,
                id: id.to_string(),
            },
            _ => ApiError::Status {
                operation,
                id: id.map(str::to_string),
                status,
            },
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes_are_not_errors() {
        assert!(ApiError::from_status("list tasks", None, 200).is_none());
        assert!(ApiError::from_status("delete task", Some("t-1"), 204).is_none());
    }

    #[test]
    fn test_not_found_needs_an_id() {
        let err = ApiError::from_status("get task", Some("t-1"), 404).unwrap();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "get task: no record with ID t-1");

        let err = ApiError::from_status("list tasks", None, 404).unwrap();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_message_carries_context() {
        let err = ApiError::from_status("delete action", Some("a-9"), 500).unwrap();
        assert_eq!(err.to_string(), "delete action (a-9) failed with HTTP 500");

        let err = ApiError::from_status("list actions", None, 502).unwrap();
        assert_eq!(err.to_string(), "list actions failed with HTTP 502");
    }
}
