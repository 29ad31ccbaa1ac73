//! Explicit build context.
//!
//! The build never reads ambient process state. Callers resolve the current
//! project, folder, task and host once and hand the values in.

/// Context a workfile build runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Project the build queries entities from.
    pub project_name: String,
    /// Path of the folder the work scene belongs to.
    pub folder_path: String,
    /// Task the work scene is opened for.
    pub task_name: String,
    /// Host application name, used to scope the settings lookup.
    pub host_name: String,
}

impl BuildContext {
    pub fn new(
        project_name: impl Into<String>,
        folder_path: impl Into<String>,
        task_name: impl Into<String>,
        host_name: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            folder_path: folder_path.into(),
            task_name: task_name.into(),
            host_name: host_name.into(),
        }
    }
}
