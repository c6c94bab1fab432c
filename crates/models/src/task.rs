use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
}

/// Only the name is creatable; status always starts as `pending`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    #[serde(alias = "Name", deserialize_with = "crate::null_as_default")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let task = Task { id: 3, name: "build".into(), status: TaskStatus::Completed };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "build", "status": "completed"}));
        assert_eq!(TaskStatus::default().to_string(), "pending");
    }

    #[test]
    fn input_ignores_status_and_unknown_fields() {
        let input: TaskInput =
            serde_json::from_str(r#"{"name":"deploy","status":"completed","extra":1}"#).unwrap();
        assert_eq!(input.name, "deploy");
        let empty: TaskInput = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.name, "");
    }

    #[test]
    fn input_accepts_null_and_capitalised_key() {
        let input: TaskInput = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(input, TaskInput::default());
        let input: TaskInput = serde_json::from_str(r#"{"Name":"deploy"}"#).unwrap();
        assert_eq!(input.name, "deploy");
    }
}
