use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task metadata attached to a folder. Only the task type matters for
/// profile matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub task_type: String,
}

impl TaskInfo {
    pub fn new(task_type: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
        }
    }
}

/// Folder is a node in the project hierarchy (asset, shot, sequence).
///
/// Folders are read-only from the build's perspective and are sourced from
/// the representation store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub folder_uuid: Uuid,
    /// Full hierarchy path, e.g. `/assets/characters/charA`.
    pub path: String,
    pub name: String,
    /// Task definitions keyed by task name.
    #[serde(default)]
    pub tasks: HashMap<String, TaskInfo>,
}

impl Folder {
    /// Task type for a task name, if the folder defines the task.
    pub fn task_type(&self, task_name: &str) -> Option<&str> {
        self.tasks.get(task_name).map(|task| task.task_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_lookup() {
        let mut tasks = HashMap::new();
        tasks.insert("modeling".to_string(), TaskInfo::new("Modeling"));

        let folder = Folder {
            folder_uuid: Uuid::new_v4(),
            path: "/assets/charA".to_string(),
            name: "charA".to_string(),
            tasks,
        };

        assert_eq!(folder.task_type("modeling"), Some("Modeling"));
        assert_eq!(folder.task_type("rigging"), None);
    }
}
