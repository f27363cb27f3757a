use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodoRequest {
    pub task: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodoRequest {
    pub task: Option<String>,
    pub status: Option<String>,
}

impl UpdateTodoRequest {
    /// Empty strings count as absent fields.
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            task: self.task.filter(|t| !t.is_empty()),
            status: self.status.filter(|s| !s.is_empty()),
        }
    }
}

/// Sparse update: `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub task: Option<String>,
    pub status: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_with_missing_fields_deserializes_to_none() {
        let input: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(input.task.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn into_patch_drops_empty_strings() {
        let input = UpdateTodoRequest {
            task: Some(String::new()),
            status: Some("done".to_string()),
        };

        let patch = input.into_patch();
        assert!(patch.task.is_none());
        assert_eq!(patch.status.as_deref(), Some("done"));
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_with_no_fields_is_empty() {
        assert!(TodoPatch::default().is_empty());
    }
}
